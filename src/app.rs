//! Frame-synchronous simulation loop
//!
//! One logical tick per presented frame. Input is polled at the start of
//! each frame and folded into held-key state before physics runs.

use crate::config::Config;
use crate::platform::{Banner, Event, Frontend, Key, Scene};
use crate::sim::{GameState, Polyline, TickInput, tick};

/// Drives a frontend against the simulation until the window closes.
pub struct SimulationLoop<F: Frontend> {
    frontend: F,
    state: GameState,
    config: Config,
    input: TickInput,
}

impl<F: Frontend> SimulationLoop<F> {
    pub fn new(frontend: F, state: GameState, config: Config) -> Self {
        Self {
            frontend,
            state,
            config,
            input: TickInput::default(),
        }
    }

    /// Run frames until the frontend requests close. After a terminal phase
    /// the loop keeps presenting the frozen scene with its outcome banner.
    pub fn run(&mut self) {
        loop {
            for event in self.frontend.poll_events() {
                match event {
                    Event::CloseRequested => return,
                    Event::KeyPressed(key) => self.apply_key(key, true),
                    Event::KeyReleased(key) => self.apply_key(key, false),
                    // The sim keeps the view it was tuned for; frontends
                    // manage their own viewport.
                    Event::Resized { .. } => {}
                }
            }

            tick(&mut self.state, &self.input, &self.config);
            let scene = self.scene();
            self.frontend.present(&scene);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    fn apply_key(&mut self, key: Key, down: bool) {
        match key {
            Key::RotateLeft => self.input.rotate_left = down,
            Key::RotateRight => self.input.rotate_right = down,
            Key::Thrust => self.input.thrust = down,
        }
    }

    /// Snapshot the current frame for the frontend.
    fn scene(&self) -> Scene {
        Scene {
            terrain: self.state.terrain.points().collect(),
            lander_position: self.state.lander.position,
            lander_rotation_degrees: self.state.lander.rotation_degrees,
            thrusters_on: self.state.lander.thrusters_on,
            banner: Banner::for_phase(self.state.phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerrainConfig;
    use crate::platform::HeadlessFrontend;
    use crate::sim::Phase;

    /// Flat terrain far below the lander: the loop can tick a few frames
    /// without the run ending underneath the test.
    fn airborne_config() -> Config {
        Config {
            terrain: TerrainConfig {
                step_y: (0, 0),
                flat_denominator: 1,
                ..TerrainConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_close_event_ends_the_loop_before_any_tick() {
        let cfg = Config::default();
        let state = GameState::new(7, &cfg);
        let mut frontend = HeadlessFrontend::new();
        frontend.push_frame(vec![Event::CloseRequested]);

        let mut sim = SimulationLoop::new(frontend, state, cfg);
        sim.run();
        assert_eq!(sim.state().time_ticks, 0);
        assert_eq!(sim.frontend().frames, 0);
    }

    #[test]
    fn test_key_events_toggle_held_input() {
        let cfg = airborne_config();
        let state = GameState::new(7, &cfg);
        let mut frontend = HeadlessFrontend::new();
        frontend.push_frame(vec![Event::KeyPressed(Key::Thrust)]);
        frontend.push_frame(vec![Event::KeyReleased(Key::Thrust)]);
        frontend.push_frame(vec![Event::CloseRequested]);

        let mut sim = SimulationLoop::new(frontend, state, cfg);
        sim.run();
        // Thrust was held for exactly the first presented frame
        assert_eq!(sim.frontend().frames, 2);
        assert!(!sim.state().lander.thrusters_on);
    }

    #[test]
    fn test_resize_is_tolerated() {
        let cfg = airborne_config();
        let state = GameState::new(7, &cfg);
        let mut frontend = HeadlessFrontend::new();
        frontend.push_frame(vec![Event::Resized {
            width: 1024.0,
            height: 768.0,
        }]);
        frontend.push_frame(vec![Event::CloseRequested]);

        let mut sim = SimulationLoop::new(frontend, state, cfg);
        sim.run();
        assert_eq!(sim.state().time_ticks, 1);
    }

    #[test]
    fn test_coasting_run_ends_frozen_with_banner() {
        let cfg = Config::default();
        let state = GameState::new(7, &cfg);
        // Long enough for gravity to bring any seed's run down
        let frontend = HeadlessFrontend::coasting(200_000);

        let mut sim = SimulationLoop::new(frontend, state, cfg);
        sim.run();

        assert!(sim.state().phase.is_terminal());
        let scene = sim.frontend().last_scene.as_ref().unwrap();
        assert!(scene.banner.is_some());
        assert!(scene.terrain.len() > 1);
    }
}
