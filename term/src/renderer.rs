//! Main application loop and terminal management.

use color_eyre::eyre::{Context, Result, eyre};
use core::time;
use ratatui::{
    Terminal,
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    prelude::Backend,
};
use std::{
    cell::RefCell,
    io,
    rc::Rc,
    sync::mpsc::{Receiver, TryRecvError},
};

use crate::{
    store::{Dispatcher, StateGetter, Store, action::Action, state::State},
    ui::{
        app::{App, Application},
        views::traits::{CustomEventContext, CustomWidgetContext},
    },
};

/// Coordinates rendering, input handling and results coming back from the
/// API worker.
///
/// Manages the terminal lifecycle (raw mode, alternate screen) and runs the
/// render loop until the user quits.
pub struct Renderer<B: Backend + io::Write> {
    terminal: RefCell<Terminal<B>>,
    store: Rc<Store>,
    app: Box<dyn Application>,
    rx: Receiver<Action>,
}

impl<B: Backend + io::Write> Renderer<B> {
    /// Creates a new renderer drawing to `terminal` and dispatching actions
    /// received on `rx` to `store`.
    pub fn new(
        terminal: Terminal<B>,
        store: Rc<Store>,
        rx: Receiver<Action>,
    ) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            store,
            app: Box::new(App::new()),
            rx,
        }
    }

    /// Initializes the terminal and starts the render loop. Returns when the
    /// user quits.
    pub fn start_render_loop(&self) -> Result<()> {
        self.enable_terminal_raw_mode()?;
        let res = self.start_loop();
        // always restore the terminal, even if the loop failed
        self.exit()?;
        res
    }

    fn start_loop(&self) -> Result<()> {
        let state = self.store.get_state();
        self.render_frame(&state)?;

        loop {
            if self.process_pending_actions() {
                let state = self.store.get_state();
                self.render_frame(&state)?;
            }

            // Use poll so we don't block the thread, allowing rendering of
            // api results as they are received
            if let Ok(has_event) = event::poll(time::Duration::from_millis(60))
                && has_event
            {
                let evt = event::read()?;

                if self.handle_event(&evt)? {
                    return Ok(());
                }

                let state = self.store.get_state();
                self.render_frame(&state)?;
            }
        }
    }

    /// Dispatches every action the worker has sent since the last call.
    /// Returns true if any action was dispatched.
    fn process_pending_actions(&self) -> bool {
        let mut dispatched = false;

        loop {
            match self.rx.try_recv() {
                Ok(action) => {
                    self.store.dispatch(action);
                    dispatched = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("api worker channel closed");
                    break;
                }
            }
        }

        dispatched
    }

    /// Routes an input event through the application. Returns true if the
    /// user asked to quit.
    fn handle_event(&self, evt: &Event) -> Result<bool> {
        let state = self.store.get_state();

        // do not allow overriding ctrl-c
        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            log::info!("received ctrl-c, exiting");
            return Ok(true);
        }

        let ctx = CustomEventContext {
            state: &state,
            dispatcher: self.store.clone(),
        };

        let handled = self.app.process_event(evt, &ctx)?;

        // allow views to override q, e.g. while typing in a form
        if !handled
            && let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('q')
        {
            return Ok(true);
        }

        Ok(false)
    }

    fn render_frame(&self, state: &State) -> Result<()> {
        let mut res = Ok(());

        self.terminal
            .borrow_mut()
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: f.area(),
                };

                if let Err(err) =
                    self.app.render_ref(f.area(), f.buffer_mut(), &ctx)
                {
                    res = Err(err);
                }
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        res
    }

    fn enable_terminal_raw_mode(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        // io::stdout() is used directly; borrowing the terminal backend here
        // causes an immediate exit
        execute!(io::stdout(), EnterAlternateScreen)
            .wrap_err("failed to enter alternate screen")?;
        Ok(())
    }

    fn exit(&self) -> Result<()> {
        let mut terminal = self.terminal.borrow_mut();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
