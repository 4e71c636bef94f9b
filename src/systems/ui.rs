use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui;
use chrono::{NaiveDate, TimeDelta};

use crate::ephemerides::PlanetarySystem;
use crate::resources::{
    AsteroidColors, AsteroidSpawn, MAX_ASTEROID_COUNT, ResetSimulation, SimConfig, SimSettings,
};
use crate::simulation::Simulation;
use crate::systems::core::measured_fps;

/// Simulated time zero.
const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2022, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Formats simulated seconds since the epoch as an ISO 8601 date.
pub fn format_date(time: f64) -> String {
    TimeDelta::try_seconds(time.floor() as i64)
        .and_then(|elapsed| EPOCH.checked_add_signed(elapsed))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "out of range".to_owned())
}

pub fn ui_controls(
    mut contexts: EguiContexts,
    simulation: Option<Res<Simulation>>,
    mut config: ResMut<SimConfig>,
    mut settings: ResMut<SimSettings>,
    mut reset: ResMut<ResetSimulation>,
    diagnostics: Res<DiagnosticsStore>,
    mut frames_rendered: Local<usize>,
) {
    if *frames_rendered < 5 {
        *frames_rendered += 1;
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Window::new("Orbital Simulation")
            .default_pos(egui::pos2(10.0, 10.0))
            .max_size([320.0, 480.0])
            .vscroll(true)
            .show(ctx, |ui| {
                ui.label(format!(
                    "FPS: {:.0}",
                    measured_fps(&diagnostics).unwrap_or(0.0)
                ));

                if let Some(simulation) = simulation.as_deref() {
                    let summary = simulation.summary();
                    ui.label(format!("Date: {}", format_date(summary.time)));
                    ui.label(format!("Planetary system: {}", summary.system.name()));
                    ui.label(format!("Time step: {:.0} s", simulation.time_step()));
                    ui.label(format!("Bodies: {}", summary.body_num));
                    ui.label(format!("Planetary system bodies: {}", summary.body_num_core));
                    ui.label(format!("Asteroids: {}", summary.asteroid_count));
                    ui.label(if summary.black_hole {
                        "Black hole ON"
                    } else {
                        "Black hole OFF"
                    });
                    ui.label(if summary.mass_tweak {
                        "Giant planet mass tweak ON"
                    } else {
                        "Giant planet mass tweak OFF"
                    });
                }
                ui.checkbox(&mut settings.paused, "Paused");

                ui.separator();
                ui.heading("Scenario");
                egui::ComboBox::from_label("System")
                    .selected_text(config.system.name())
                    .show_ui(ui, |ui| {
                        for system in PlanetarySystem::ALL {
                            ui.selectable_value(&mut config.system, system, system.name());
                        }
                    });
                ui.add(
                    egui::Slider::new(&mut config.days_per_second, 1.0..=1000.0)
                        .logarithmic(true)
                        .text("Days per Second"),
                );
                ui.add(
                    egui::Slider::new(&mut config.asteroid_count, 0..=MAX_ASTEROID_COUNT)
                        .text("Asteroids"),
                );
                ui.checkbox(&mut config.black_hole, "Black Hole");
                ui.checkbox(&mut config.mass_tweak, "Giant Planet Mass x1000");

                let mut party = config.asteroid_colors == AsteroidColors::Party;
                if ui.checkbox(&mut party, "Party Colors").changed() {
                    config.asteroid_colors = if party {
                        AsteroidColors::Party
                    } else {
                        AsteroidColors::Gray
                    };
                }
                let mut aligned = config.asteroid_spawn == AsteroidSpawn::Aligned;
                if ui.checkbox(&mut aligned, "Aligned Spawn").changed() {
                    config.asteroid_spawn = if aligned {
                        AsteroidSpawn::Aligned
                    } else {
                        AsteroidSpawn::Scattered
                    };
                }

                ui.separator();
                ui.heading("Controls");
                ui.label("Orbit: Arrow Keys / WASD");
                ui.label("Zoom: Scroll Wheel / Z & X");

                if ui.button("Reset Simulation").clicked() {
                    reset.pending = true;
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::SECONDS_PER_DAY;

    #[test]
    fn epoch_is_new_year_2022() {
        assert_eq!(format_date(0.0), "2022-01-01");
        assert_eq!(format_date(86_399.0), "2022-01-01");
    }

    #[test]
    fn dates_roll_over_months_and_years() {
        let day = f64::from(SECONDS_PER_DAY);
        assert_eq!(format_date(31.0 * day), "2022-02-01");
        assert_eq!(format_date(59.0 * day), "2022-03-01");
        assert_eq!(format_date(365.0 * day), "2023-01-01");
        // 2024 is a leap year.
        assert_eq!(format_date((365.0 * 2.0 + 59.0) * day), "2024-02-29");
    }

    #[test]
    fn absurd_times_do_not_panic() {
        assert_eq!(format_date(f64::MAX), "out of range");
        assert_eq!(format_date(-1e30), "out of range");
    }
}
