//! Round orchestrator
//!
//! Owns the simulation state together with everything that is fixed at
//! construction (colors, menu layout, audio backend) and routes commands,
//! ticks and frames to the right place.

use glam::IVec2;

use crate::audio::{AudioManager, SoundEffect};
use crate::input::Command;
use crate::renderer::scene::Hud;
use crate::renderer::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{Direction, GameEvent, GameState, LayoutError, RoundState, tick};
use crate::theme::Theme;
use crate::ui::{MenuAction, StartMenu};

pub struct Game {
    state: GameState,
    theme: Theme,
    menu: StartMenu,
    audio: AudioManager,
    show_fps: bool,
    current_fps: u32,
}

impl Game {
    pub fn new(settings: Settings, audio: AudioManager) -> Result<Self, LayoutError> {
        let Settings {
            show_fps,
            layout,
            theme,
        } = settings;
        let menu = StartMenu::for_screen(layout.screen_width, layout.screen_height);
        let state = GameState::new(layout)?;
        log::info!(
            "New round: {} blocks, {} to win",
            state.blocks.len(),
            state.score.winning_score()
        );
        Ok(Self {
            state,
            theme,
            menu,
            audio,
            show_fps,
            current_fps: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> RoundState {
        self.state.phase
    }

    pub fn menu(&self) -> &StartMenu {
        &self.menu
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn update_current_fps(&mut self, fps: u32) {
        self.current_fps = fps;
    }

    /// Apply one input command; commands that make no sense in the current
    /// state are ignored
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.state.move_paddle(Direction::Left),
            Command::MoveRight => self.state.move_paddle(Direction::Right),
            Command::PauseToggle => self.state.toggle_pause(),
            Command::Begin => self.state.begin(),
            Command::Quit => self.state.quit(),
            Command::Confirm => self.state.confirm(),
            Command::PointerClick { x, y } => self.click(IVec2::new(x, y)),
        }
    }

    fn click(&mut self, point: IVec2) {
        if self.state.phase != RoundState::Start {
            return;
        }
        match self.menu.hit(point) {
            Some(MenuAction::Play) => self.state.begin(),
            Some(MenuAction::Highscores) => self.state.show_highscores(),
            None => {}
        }
    }

    /// Advance one tick. Round endings trigger a detached sound request.
    pub fn update(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state);
        for effect in events.iter().copied().filter_map(SoundEffect::for_event) {
            self.audio.play(effect);
        }
        events
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        let hud = Hud {
            show_fps: self.show_fps,
            fps: self.current_fps,
        };
        draw_frame(renderer, &self.state, &self.theme, &self.menu, hud);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    fn game() -> Game {
        Game::new(Settings::default(), AudioManager::silent()).unwrap()
    }

    fn click_center(game: &mut Game, rect: crate::sim::Rect) {
        let c = rect.pos + rect.size / 2;
        game.handle(Command::PointerClick { x: c.x, y: c.y });
    }

    #[test]
    fn test_click_play_starts_round() {
        let mut game = game();
        let play = game.menu().play_button().rect();
        click_center(&mut game, play);
        assert_eq!(game.phase(), RoundState::Playing);
        assert!(game.state().ball.started);
    }

    #[test]
    fn test_click_highscores_is_a_dead_end() {
        let mut game = game();
        let scores = game.menu().highscores_button().rect();
        click_center(&mut game, scores);
        assert_eq!(game.phase(), RoundState::Highscore);

        game.handle(Command::Begin);
        game.handle(Command::PauseToggle);
        assert_eq!(game.phase(), RoundState::Highscore);

        let mut list = DrawList::new();
        game.render(&mut list);
        assert!(list.contains_text("No highscores yet"));

        game.handle(Command::Confirm);
        assert!(!game.is_running());
    }

    #[test]
    fn test_clicks_ignored_outside_start() {
        let mut game = game();
        game.handle(Command::Begin);
        let scores = game.menu().highscores_button().rect();
        click_center(&mut game, scores);
        assert_eq!(game.phase(), RoundState::Playing);
    }

    #[test]
    fn test_moves_only_while_playing() {
        let mut game = game();
        game.handle(Command::MoveRight);
        assert_eq!(game.state().paddle.x(), 40);

        game.handle(Command::Begin);
        game.handle(Command::MoveRight);
        assert_eq!(game.state().paddle.x(), 50);
        game.handle(Command::MoveLeft);
        game.handle(Command::MoveLeft);
        assert_eq!(game.state().paddle.x(), 30);
    }

    #[test]
    fn test_quit_from_anywhere() {
        let mut game = game();
        game.handle(Command::Quit);
        assert!(!game.is_running());
    }

    #[test]
    fn test_fps_overlay_from_settings() {
        let mut game = Game::new(Settings::with_fps(true), AudioManager::silent()).unwrap();
        game.update_current_fps(59);
        let mut list = DrawList::new();
        game.render(&mut list);
        assert!(list.contains_text("FPS: 59"));
    }

    #[test]
    fn test_invalid_layout_is_rejected() {
        let mut settings = Settings::default();
        settings.layout.winning_score = 0;
        assert!(matches!(
            Game::new(settings, AudioManager::silent()),
            Err(LayoutError::ZeroWinningScore)
        ));
    }
}
