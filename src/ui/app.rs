//! UI state and render loop lifecycle.
//!
//! [`Ui`] owns the four views, the active view selection and the current
//! render loop instance. A loop instance is one terminal grab plus the
//! keybinding table installed for it.
//!
//! Composing text in the external editor needs the whole terminal, so the
//! editor handoff releases the loop instance, blocks on the editor, applies
//! the result and starts a fresh instance. The run loop then simply carries
//! on with the new instance; there is no nesting and no restart signal.

use crate::backend::{BugId, BugStore, StoreError};
use crate::config::Config;
use crate::constants::{
    DEFAULT_DATE_FORMAT, INPUT_POPUP_FILTER_TITLE, MSG_POPUP_ERROR_TITLE, NOTICE_EMPTY_MESSAGE, NOTICE_EMPTY_TITLE,
};
use crate::editor::Editor;
use crate::ui::components::{BugDetailView, BugListView, InputPopup, MessagePopup};
use crate::ui::core::{Action, Console, Context, Keymap, Screen, UiError, View, ViewKind};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

/// Display options for the views
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub date_format: String,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl From<&Config> for UiOptions {
    fn from(config: &Config) -> Self {
        Self {
            date_format: config.ui.date_format.clone(),
        }
    }
}

/// Work to run on a fresh loop instance before it starts reading keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostInit {
    /// Point the detail view at this bug and make it the active view
    ShowBug(BugId),
}

/// Whether the run loop keeps going after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// All views, created once and reused across loop restarts
pub struct UiState {
    active: ViewKind,
    pub list: BugListView,
    pub detail: BugDetailView,
    pub message: MessagePopup,
    pub input: InputPopup,
}

impl UiState {
    pub fn new(options: &UiOptions) -> Self {
        Self {
            active: ViewKind::List,
            list: BugListView::new(options.date_format.clone()),
            detail: BugDetailView::new(options.date_format.clone()),
            message: MessagePopup::new(),
            input: InputPopup::new(),
        }
    }

    pub fn active(&self) -> ViewKind {
        self.active
    }

    pub fn is_active(&self, kind: ViewKind) -> bool {
        self.active == kind
    }

    fn view_mut(&mut self, kind: ViewKind) -> &mut dyn View {
        match kind {
            ViewKind::List => &mut self.list,
            ViewKind::Detail => &mut self.detail,
        }
    }

    /// Disable the active view, then make `target` active.
    ///
    /// If disabling fails nothing is switched.
    pub fn activate(&mut self, target: ViewKind, screen: &mut dyn Screen) -> Result<(), UiError> {
        let current = self.active;
        self.view_mut(current).disable(screen)?;
        self.active = target;
        log::debug!("Active view: {} -> {}", current, target);
        Ok(())
    }

    /// Build the keybinding table for a new loop instance.
    ///
    /// Registration order is dispatch priority: quit, the full-screen views,
    /// the message popup, then the input popup.
    pub fn keybindings(&self) -> Result<Keymap, UiError> {
        let mut keymap = Keymap::new();
        keymap.bind(Context::Global, KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit)?;
        self.list.keybindings(&mut keymap)?;
        self.detail.keybindings(&mut keymap)?;
        self.message.keybindings(&mut keymap)?;
        self.input.keybindings(&mut keymap)?;
        Ok(keymap)
    }

    /// Whether bindings registered under `context` may fire right now
    pub fn is_eligible(&self, context: Context) -> bool {
        match context {
            Context::Global => true,
            Context::List => !self.input.is_visible() && self.is_active(ViewKind::List),
            Context::Detail => !self.input.is_visible() && self.is_active(ViewKind::Detail),
            Context::MessagePopup => self.message.is_visible(),
            Context::InputPopup => self.input.is_visible(),
        }
    }

    /// Draw the active view, then the message popup, then the input popup
    pub fn layout(&mut self, f: &mut Frame) {
        let area = f.area();
        let active = self.active;
        self.view_mut(active).layout(f, area);
        self.message.layout(f, LayoutManager::message_popup_area(area));
        self.input.layout(f, LayoutManager::input_popup_area(area));
    }

    /// Reload the list and the detail snapshot from the store
    pub fn refresh(&mut self, store: &dyn BugStore) -> Result<(), StoreError> {
        self.list.set_bugs(store.bugs()?);
        if let Some(id) = self.detail.bug_id() {
            self.detail.set_bug(store.snapshot(&id)?);
        }
        Ok(())
    }
}

/// A live terminal grab and the bindings installed for it
struct LoopInstance {
    screen: Box<dyn Screen>,
    keymap: Keymap,
}

/// The terminal UI: views, data layer, editor and the loop owner.
pub struct Ui<'a> {
    state: UiState,
    loop_handle: Option<LoopInstance>,
    store: &'a mut dyn BugStore,
    editor: &'a mut dyn Editor,
    console: &'a mut dyn Console,
}

impl<'a> Ui<'a> {
    pub fn new(
        store: &'a mut dyn BugStore,
        editor: &'a mut dyn Editor,
        console: &'a mut dyn Console,
        options: &UiOptions,
    ) -> Self {
        Self {
            state: UiState::new(options),
            loop_handle: None,
            store,
            editor,
            console,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    /// True while no loop instance holds the terminal
    pub fn is_suspended(&self) -> bool {
        self.loop_handle.is_none()
    }

    /// Run until quit or the first fatal error.
    ///
    /// The terminal is always released before this returns.
    pub fn run(&mut self) -> Result<(), UiError> {
        log::info!("Starting terminal UI");
        self.init_loop(None)?;
        let result = self.run_loop();
        let released = self.release();

        match result {
            Ok(()) => {
                log::info!("Terminal UI exited");
                released
            }
            Err(e) => {
                if let Err(release_err) = released {
                    log::warn!("Failed to release terminal after error: {}", release_err);
                }
                log::error!("Terminal UI failed: {}", e);
                Err(e)
            }
        }
    }

    /// Start a new loop instance: acquire the terminal, install bindings, and
    /// run the optional post-init action.
    ///
    /// On any failure after acquiring, the terminal is released again.
    pub fn init_loop(&mut self, action: Option<PostInit>) -> Result<(), UiError> {
        self.state.refresh(&*self.store)?;

        let screen = self.console.acquire()?;
        let keymap = match self.state.keybindings() {
            Ok(keymap) => keymap,
            Err(e) => {
                if let Err(release_err) = screen.release() {
                    log::warn!("Failed to release terminal: {}", release_err);
                }
                return Err(e);
            }
        };
        self.loop_handle = Some(LoopInstance { screen, keymap });
        log::debug!("Loop instance started");

        if let Some(action) = action {
            if let Err(e) = self.apply_post_init(action) {
                if let Err(release_err) = self.release() {
                    log::warn!("Failed to release terminal: {}", release_err);
                }
                return Err(e);
            }
        }
        Ok(())
    }

    fn apply_post_init(&mut self, action: PostInit) -> Result<(), UiError> {
        match action {
            PostInit::ShowBug(id) => {
                let bug = self.store.snapshot(&id)?;
                self.state.detail.set_bug(bug);
                self.activate_view(ViewKind::Detail)
            }
        }
    }

    /// Drop the current loop instance and give the terminal back
    pub fn release(&mut self) -> Result<(), UiError> {
        if let Some(instance) = self.loop_handle.take() {
            instance.screen.release()?;
            log::debug!("Loop instance released");
        }
        Ok(())
    }

    pub fn activate_view(&mut self, target: ViewKind) -> Result<(), UiError> {
        let instance = self.loop_handle.as_mut().ok_or(UiError::Suspended)?;
        self.state.activate(target, instance.screen.as_mut())
    }

    /// Draw and dispatch keys until quit
    pub fn run_loop(&mut self) -> Result<(), UiError> {
        loop {
            self.draw()?;

            let instance = self.loop_handle.as_mut().ok_or(UiError::Suspended)?;
            let Some(key) = instance.screen.next_key()? else {
                continue;
            };

            if self.handle_key(key)? == Flow::Quit {
                log::info!("Quit requested");
                return Ok(());
            }
        }
    }

    fn draw(&mut self) -> Result<(), UiError> {
        let instance = self.loop_handle.as_mut().ok_or(UiError::Suspended)?;
        let state = &mut self.state;
        instance.screen.draw(&mut |f: &mut Frame<'_>| state.layout(f))?;
        Ok(())
    }

    /// Resolve a key through the binding table and execute its action.
    ///
    /// Unbound keys go to the input popup when it is visible.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Flow, UiError> {
        let instance = self.loop_handle.as_ref().ok_or(UiError::Suspended)?;
        let state = &self.state;
        let action = instance
            .keymap
            .resolve(&key, |context| state.is_eligible(context))
            .map(|binding| binding.action.clone());

        match action {
            Some(action) => self.dispatch(action),
            None => {
                self.state.input.edit(&key);
                Ok(Flow::Continue)
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Flow, UiError> {
        match action {
            Action::Quit => return Ok(Flow::Quit),
            Action::None => {}
            Action::SelectNext => self.state.list.select_next(),
            Action::SelectPrevious => self.state.list.select_previous(),
            Action::OpenSelected => {
                if let Some(bug) = self.state.list.selected_bug().cloned() {
                    self.state.detail.set_bug(bug);
                    self.activate_view(ViewKind::Detail)?;
                }
            }
            Action::OpenFilter => {
                let current = self.state.list.filter().to_string();
                self.state
                    .input
                    .activate(INPUT_POPUP_FILTER_TITLE, current, Box::new(Action::ApplyFilter));
            }
            Action::ApplyFilter(filter) => self.state.list.set_filter(filter),
            Action::ScrollDown => self.state.detail.scroll_down(),
            Action::ScrollUp => self.state.detail.scroll_up(),
            Action::ShowList => self.activate_view(ViewKind::List)?,
            Action::NewBug => self.new_bug_with_editor()?,
            Action::AddComment => match self.state.detail.bug_id() {
                Some(id) => self.add_comment_with_editor(id)?,
                None => log::warn!("Add comment requested without a bug"),
            },
            Action::SetTitle => match self.state.detail.bug_id() {
                Some(id) => self.set_title_with_editor(id)?,
                None => log::warn!("Set title requested without a bug"),
            },
            Action::DismissMessage => self.state.message.deactivate(),
            Action::SubmitInput => {
                let next = self.state.input.submit();
                return self.dispatch(next);
            }
            Action::CancelInput => self.state.input.deactivate(),
        }
        Ok(Flow::Continue)
    }

    fn new_bug_with_editor(&mut self) -> Result<(), UiError> {
        self.release()?;

        let post_init = match self.editor.bug_create_input("", "")? {
            Some(draft) => {
                let id = self.store.create_bug(&draft.title, &draft.message)?;
                Some(PostInit::ShowBug(id))
            }
            None => {
                log::info!("Bug creation aborted: empty title");
                self.state.message.activate(MSG_POPUP_ERROR_TITLE, NOTICE_EMPTY_TITLE);
                None
            }
        };

        self.init_loop(post_init)
    }

    fn add_comment_with_editor(&mut self, id: BugId) -> Result<(), UiError> {
        self.release()?;

        match self.editor.comment_input()? {
            Some(message) => self.store.add_comment(&id, &message)?,
            None => {
                log::info!("Comment aborted: empty message");
                self.state.message.activate(MSG_POPUP_ERROR_TITLE, NOTICE_EMPTY_MESSAGE);
            }
        }

        self.init_loop(None)
    }

    fn set_title_with_editor(&mut self, id: BugId) -> Result<(), UiError> {
        self.release()?;

        let current = self.store.snapshot(&id)?.title;
        match self.editor.title_input(&current)? {
            Some(title) => self.store.set_title(&id, &title)?,
            None => {
                log::info!("Title change aborted: empty title");
                self.state.message.activate(MSG_POPUP_ERROR_TITLE, NOTICE_EMPTY_TITLE);
            }
        }

        self.init_loop(None)
    }
}
