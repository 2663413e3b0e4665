use std::fmt::Write as _;

use bevy::prelude::*;
use idle_clicker::{EconomySnapshot, UpgradeKind, rules::PRESTIGE_REQUIREMENT};

use super::resources::{HudText, SessionState};

const NUMBER_SCALES: [(f64, &str); 4] = [
    (1e15, "Quadrillion"),
    (1e12, "Trillion"),
    (1e9, "Billion"),
    (1e6, "Million"),
];

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        Text::new("Loading..."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.94, 0.97, 0.99)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn refresh_hud(state: Res<SessionState>, mut hud_query: Query<&mut Text, With<HudText>>) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };

    let snapshot = state.session.snapshot();
    let status = state
        .session
        .visible_status()
        .map(|status| status.message())
        .unwrap_or("");

    *hud = Text::new(render_hud(&snapshot, status));
}

fn render_hud(snapshot: &EconomySnapshot, status: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Points: {}", format_number(snapshot.points.floor()));
    let _ = writeln!(
        out,
        "Per second: {}   Per click: {}",
        format_number(snapshot.auto_rate),
        format_number(snapshot.points_per_click)
    );
    let _ = writeln!(
        out,
        "Prestige Points: {} (x{:.2})",
        snapshot.prestige_points, snapshot.prestige_multiplier
    );
    if snapshot.can_prestige {
        let _ = writeln!(
            out,
            "[P] Prestige for {} points",
            snapshot.pending_prestige_points
        );
    } else {
        let _ = writeln!(
            out,
            "Prestige at {} points",
            format_number(PRESTIGE_REQUIREMENT)
        );
    }

    let _ = writeln!(out, "\nStore (buy x{}):", snapshot.bulk_amount.count());
    for (slot, upgrade) in snapshot.upgrades.iter().enumerate() {
        let marker = if upgrade.affordable { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker}[{}] {} (Level {})  Cost: {}  x{}: {}",
            slot + 1,
            upgrade.name,
            upgrade.levels,
            format_number(upgrade.cost),
            snapshot.bulk_amount.count(),
            format_number(upgrade.bulk_cost),
        );
    }

    let owned: Vec<String> = snapshot
        .owned_upgrades()
        .map(|upgrade| match upgrade.kind {
            UpgradeKind::FlatAuto => format!("{}: +{:.1}/sec", upgrade.name, upgrade.effect),
            UpgradeKind::FlatClick => format!("{}: +{}/click", upgrade.name, upgrade.effect),
            UpgradeKind::PercentAuto => {
                format!("{}: +{:.1}% total PPS", upgrade.name, upgrade.effect)
            }
            UpgradeKind::PercentClick => {
                format!("{}: +{:.1}% click power", upgrade.name, upgrade.effect)
            }
        })
        .collect();
    if owned.is_empty() {
        let _ = writeln!(out, "\nNo upgrades purchased yet.");
    } else {
        let _ = writeln!(out, "\nActive: {}", owned.join(", "));
    }

    let _ = writeln!(
        out,
        "\nSpace click, 1-9 buy, B bulk amount, S save, E export, Shift+Backspace reset"
    );
    out.push_str(status);
    out
}

pub fn format_number(value: f64) -> String {
    for (scale, name) in NUMBER_SCALES {
        if value.abs() >= scale {
            return format!("{:.2} {name}", value / scale);
        }
    }
    if value.fract() == 0.0 || value.abs() >= 1e3 {
        format!("{:.0}", value.trunc())
    } else {
        format!("{value:.1}")
    }
}
