//! Game loop
//!
//! One iteration: poll input -> tick the simulation -> render -> sleep.
//! The loop renders once before the first tick and runs until the input
//! source reports a quit.

use std::time::Duration;

use anyhow::Result;

use crate::platform::{Clock, ControlState, Flow, InputSource, KeyMap, Pacer};
use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{Color, GameState, tick};

/// Game instance holding all state and both collaborators
pub struct Game<I, R, C> {
    state: GameState,
    input: I,
    renderer: R,
    clock: C,
    controls: ControlState,
    pacer: Pacer,
    immune_color: Color,
    /// Duration of the previous tick, shown by the renderer
    last_tick_ms: u64,
}

impl<I, R, C> Game<I, R, C>
where
    I: InputSource,
    R: Renderer,
    C: Clock,
{
    pub fn new(settings: &Settings, input: I, renderer: R, clock: C) -> Self {
        let mut state = GameState::new(
            settings.field,
            settings.rules.clone(),
            settings.spawns,
            settings.seed,
        );
        state.now = clock.elapsed();

        Self {
            state,
            input,
            renderer,
            clock,
            controls: ControlState::new(KeyMap::default()),
            pacer: Pacer::new(settings.tick_period()),
            immune_color: settings.immune_color,
            last_tick_ms: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Draw the current state
    pub fn render(&mut self) -> Result<()> {
        let frame = Frame::new(&self.state, self.immune_color, self.last_tick_ms);
        self.renderer.render(&frame)
    }

    /// Run one loop iteration. Returns `Flow::Quit` as soon as a quit event
    /// is seen; no tick is simulated in that case.
    pub fn step(&mut self) -> Result<Flow> {
        let t0 = self.clock.elapsed();

        for event in self.input.poll()? {
            if self.controls.apply(event) == Flow::Quit {
                log::info!("Quit requested after {} ticks", self.state.time_ticks);
                return Ok(Flow::Quit);
            }
        }

        let input = self.controls.take_input();
        tick(&mut self.state, &input, t0);

        self.render()?;

        let tick_ms = self.clock.elapsed().saturating_sub(t0).as_millis() as u64;
        self.last_tick_ms = tick_ms;
        self.clock.sleep(self.pacer.wait_after(tick_ms));

        Ok(Flow::Continue)
    }

    /// Render once, then loop until quit
    pub fn run(&mut self) -> Result<()> {
        log::info!(
            "Starting session: field {}x{}, tick {:?}, collisions {}",
            self.state.field.width,
            self.state.field.height,
            self.pacer.period(),
            if self.state.rules.collisions { "on" } else { "off" }
        );

        self.render()?;
        while self.step()? == Flow::Continue {}

        let [a, b] = &self.state.worms;
        log::info!(
            "Final scores after {:?}: P1 {:.0}, P2 {:.0}",
            self.now(),
            a.score,
            b.score
        );
        Ok(())
    }

    /// Session time of the latest tick
    pub fn now(&self) -> Duration {
        self.state.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{InputEvent, Key, ManualClock};
    use std::collections::VecDeque;

    /// Replays one batch of events per poll, then quits
    struct Script(VecDeque<Vec<InputEvent>>);

    impl InputSource for Script {
        fn poll(&mut self) -> Result<Vec<InputEvent>> {
            Ok(self.0.pop_front().unwrap_or_else(|| vec![InputEvent::Quit]))
        }
    }

    #[derive(Default)]
    struct Recorder {
        tick_ms: Vec<u64>,
        heads: Vec<glam::DVec2>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
            self.tick_ms.push(frame.last_tick_ms);
            self.heads.push(frame.worms[0].pos);
            Ok(())
        }
    }

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.rules.spawn_hits = 0;
        settings
    }

    #[test]
    fn test_run_until_quit() {
        let script = Script(VecDeque::from(vec![
            vec![InputEvent::KeyDown(Key::Up)],
            vec![],
            vec![InputEvent::KeyUp(Key::Up)],
        ]));
        let mut game = Game::new(&quiet_settings(), script, Recorder::default(), ManualClock::new());
        game.run().unwrap();

        assert_eq!(game.state().time_ticks, 3);
        // Initial frame plus one per tick
        assert_eq!(game.renderer().heads.len(), 4);
        assert_eq!(game.renderer().tick_ms, vec![0, 0, 0, 0]);
        // Two ticks of acceleration, then coasting
        assert!((game.state().worms[0].speed - 0.4).abs() < 1e-9);
        // Every gap is one full period
        assert_eq!(game.clock.elapsed(), Duration::from_millis(120));
        assert_eq!(game.now(), Duration::from_millis(80));
    }

    #[test]
    fn test_quit_before_tick() {
        let script = Script(VecDeque::from(vec![vec![
            InputEvent::KeyDown(Key::Up),
            InputEvent::Quit,
        ]]));
        let mut game = Game::new(&quiet_settings(), script, Recorder::default(), ManualClock::new());
        game.run().unwrap();

        assert_eq!(game.state().time_ticks, 0);
        assert_eq!(game.renderer().heads.len(), 1);
    }

    #[test]
    fn test_reset_key_collapses_trails() {
        let mut settings = quiet_settings();
        settings.spawns[0].pos = (100.0, 100.0);
        let script = Script(VecDeque::from(vec![vec![], vec![InputEvent::KeyDown(Key::Space)]]));
        let mut game = Game::new(&settings, script, Recorder::default(), ManualClock::new());
        game.state_mut().worms[0].speed = 25.0;

        assert_eq!(game.step().unwrap(), Flow::Continue);
        assert_eq!(game.state().worms[0].trail().len(), 2);

        assert_eq!(game.step().unwrap(), Flow::Continue);
        // Reset happens before moving, so only the new head sample remains
        let trail = game.state().worms[0].trail();
        assert_eq!(trail.len(), 2);
        assert!((trail[0] - glam::DVec2::new(125.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn test_input_errors_stop_the_loop() {
        struct Broken;
        impl InputSource for Broken {
            fn poll(&mut self) -> Result<Vec<InputEvent>> {
                anyhow::bail!("device unplugged")
            }
        }
        let mut game = Game::new(&quiet_settings(), Broken, Recorder::default(), ManualClock::new());
        let err = game.run().unwrap_err();
        assert!(err.to_string().contains("unplugged"));
    }
}
