//! Application state and the frame loop.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use digirain_config::Config;
use digirain_core::{Rgb, Surface};
use digirain_panels::{Menu, Section, TypingText, is_glitching, scanline_row, section_for};
use digirain_rain::{BankError, CellCanvas, EffectBank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{DefaultTerminal, Frame, Terminal, backend::Backend};

use crate::ui;

/// An open content panel.
#[derive(Debug, Clone)]
pub struct OpenPanel {
    pub key: String,
    pub section: Section,
    pub typing: Option<TypingText>,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Title shown above the menu.
    title: String,
    /// Rain variants, one per menu section.
    bank: EffectBank,
    /// Terminal-backed pixel surface the rain paints into.
    canvas: CellCanvas,
    /// Menu cursor.
    menu: Menu,
    /// Panel currently on screen.
    panel: Option<OpenPanel>,
    /// Target time per frame.
    frame_time: Duration,
    /// When the next frame is due.
    next_frame: Instant,
    /// When the app started, for time-driven effects.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let canvas = CellCanvas::new(0, 0, config.cell_width, config.cell_height);
        let bank = EffectBank::new(
            config.variants,
            config.font_size,
            canvas.width(),
            canvas.height(),
            rng,
        )
        .with_trail_alpha(config.trail_alpha);
        let menu = Menu::new(bank.keys());

        Self {
            running: false,
            title: config.title,
            bank,
            canvas,
            menu,
            panel: None,
            frame_time: Duration::from_millis(config.frame_ms),
            next_frame: Instant::now(),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    ///
    /// Input is handled as it arrives, but the rain only advances when a
    /// frame is due, so key repeat or resize storms cannot speed it up.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.draw_if_due(&mut terminal, Instant::now())?;
            let timeout = self.next_frame.saturating_duration_since(Instant::now());
            self.handle_crossterm_events(timeout)?;
        }
        Ok(())
    }

    /// Draw one frame if its deadline has passed. Returns whether it drew.
    fn draw_if_due<B>(
        &mut self,
        terminal: &mut Terminal<B>,
        now: Instant,
    ) -> color_eyre::Result<bool>
    where
        B: Backend,
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        if now < self.next_frame {
            return Ok(false);
        }
        terminal.draw(|frame| self.render(frame))?;
        self.schedule_next_frame(now);
        Ok(true)
    }

    /// Move the deadline one frame on, without bursting to catch up on
    /// frames missed while stalled.
    fn schedule_next_frame(&mut self, now: Instant) {
        self.next_frame += self.frame_time;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_time;
        }
    }

    /// Milliseconds since start.
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Advance the rain one frame and draw everything.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.sync_size(area.width, area.height);

        self.bank.render_frame(&mut self.canvas);
        frame.render_widget(&self.canvas, area);

        let now = self.elapsed_ms();
        let accent = self.bank.active_color().unwrap_or(Rgb::GREEN);
        if let Some(row) = scanline_row(now, area.height) {
            ui::render_scanline(frame, row, accent);
        }
        ui::render_title(frame, &self.title, is_glitching(now), accent);
        ui::render_menu(frame, &self.menu, self.bank.active_key(), accent);
        if let Some(panel) = &self.panel {
            ui::render_panel(frame, panel, now, accent);
        }
    }

    /// Re-lay the canvas and every variant when the terminal size changes.
    fn sync_size(&mut self, cols: u16, rows: u16) {
        if self.canvas.grid_size() == (cols, rows) {
            return;
        }
        self.canvas.resize(cols, rows);
        self.bank.resize(self.canvas.width(), self.canvas.height());
        tracing::debug!(cols, rows, "terminal resized");
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` so the next frame is not delayed.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(cols, rows) => self.sync_size(cols, rows),
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
            | (_, KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Esc | KeyCode::Char('x')) if self.panel.is_some() => self.close_panel(),
            (_, KeyCode::Esc) => self.quit(),
            (_, KeyCode::Left | KeyCode::BackTab) => self.menu.previous(),
            (_, KeyCode::Right | KeyCode::Tab) => self.menu.next(),
            (_, KeyCode::Enter) => self.open_selected(),
            (_, KeyCode::Char(c @ '1'..='9')) => {
                let index = c as usize - '1' as usize;
                if self.menu.select(index).is_some() {
                    self.open_selected();
                }
            }
            _ => {}
        }
    }

    fn open_selected(&mut self) {
        let Some(key) = self.menu.selected_item().map(str::to_string) else {
            return;
        };
        if let Err(err) = self.open_section(&key) {
            tracing::warn!(%err, "menu item has no rain variant");
        }
    }

    /// Activate the variant for `key` and show its panel.
    pub fn open_section(&mut self, key: &str) -> Result<(), BankError> {
        self.bank.set_active(key)?;
        self.menu.select_key(key);

        let key = self.bank.active_key().unwrap_or(key).to_string();
        let section = section_for(&key);
        let typing = section
            .typed
            .as_deref()
            .map(|text| TypingText::new(text, self.elapsed_ms()));
        tracing::info!(key = %key, "opened section");
        self.panel = Some(OpenPanel {
            key,
            section,
            typing,
        });
        Ok(())
    }

    /// Hide the panel and stop the rain.
    fn close_panel(&mut self) {
        self.panel = None;
        self.bank.deactivate_all();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
