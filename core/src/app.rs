//! The stateful todo view-model.
//!
//! # Design
//! `TodoApp` owns the last known server state (`items`) plus the scalar UI
//! state around it: the loading flag, the dismissible error text, the active
//! display filter, the one in-progress edit draft, and the create-form input
//! buffers. Every operation follows the same contract: optional local check,
//! one HTTP round-trip through [`Transport`], then merge the server's
//! response into local state on success or set a fixed per-operation error
//! message on any failure. Failures never leave this type — there is no
//! unrecoverable error class.
//!
//! `items` is a cache of what the server last returned, in server order. The
//! client never synthesizes server-assigned fields and never shows a
//! speculative mutation: an item changes only when the server's echo arrives.

use crate::api::TodoApi;
use crate::config::Config;
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, UpdateTodo};

pub const FETCH_FAILED: &str = "Failed to fetch todos";
pub const CREATE_FAILED: &str = "Failed to create todo";
pub const UPDATE_FAILED: &str = "Failed to update todo";
pub const DELETE_FAILED: &str = "Failed to delete todo";

/// Display-time predicate over `completed`. Never touches stored data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// The unsaved edit buffer for a single item. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Stateful client for the remote todo collection.
///
/// The presentation layer reads state through the accessors, feeds text input
/// through the setters, and triggers one operation per discrete UI event.
/// Operations are blocking and complete before returning, so state is only
/// ever mutated from inside them.
pub struct TodoApp<T: Transport> {
    api: TodoApi,
    transport: T,
    items: Vec<Todo>,
    loading: bool,
    error: Option<String>,
    filter: Filter,
    editing: Option<EditDraft>,
    new_title: String,
    new_description: String,
}

impl<T: Transport> TodoApp<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self {
            api: TodoApi::new(&config.api_base_url),
            transport,
            items: Vec::new(),
            loading: false,
            error: None,
            filter: Filter::All,
            editing: None,
            new_title: String::new(),
            new_description: String::new(),
        }
    }

    /// Construct the client and run the one automatic initial load.
    pub fn start(config: Config, transport: T) -> Self {
        let mut app = Self::new(config, transport);
        app.load_all();
        app
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Fetch the full collection and replace `items` with it.
    ///
    /// Runs once automatically via [`TodoApp::start`]; may be re-invoked
    /// manually at any time. `loading` is cleared whatever the outcome.
    pub fn load_all(&mut self) {
        self.loading = true;
        self.error = None;

        let req = self.api.build_list_todos();
        let result = self
            .transport
            .execute(&req)
            .and_then(|resp| self.api.parse_list_todos(resp));

        match result {
            Ok(todos) => {
                log::debug!("loaded {} todos", todos.len());
                self.items = todos;
            }
            Err(e) => {
                log::warn!("fetch failed: {e}");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Create a todo from the form buffers.
    ///
    /// No-op when the title is empty or whitespace-only. On success the
    /// server's todo is appended and the buffers are cleared; on failure the
    /// buffers are left alone so the user can retry.
    pub fn create(&mut self) {
        if self.new_title.trim().is_empty() {
            return;
        }
        self.error = None;

        let input = CreateTodo {
            title: self.new_title.clone(),
            description: non_empty(&self.new_description),
            completed: false,
        };
        let result = self
            .api
            .build_create_todo(&input)
            .and_then(|req| self.transport.execute(&req))
            .and_then(|resp| self.api.parse_create_todo(resp));

        match result {
            Ok(todo) => {
                log::debug!("created todo {}", todo.id);
                self.items.push(todo);
                self.new_title.clear();
                self.new_description.clear();
            }
            Err(e) => {
                log::warn!("create failed: {e}");
                self.error = Some(CREATE_FAILED.to_string());
            }
        }
    }

    /// Open an edit draft for the given item. Purely local; silently replaces
    /// any prior unsaved draft. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: i64) {
        if let Some(todo) = self.items.iter().find(|t| t.id == id) {
            self.editing = Some(EditDraft {
                id,
                title: todo.title.clone(),
                description: todo.description.clone().unwrap_or_default(),
            });
        }
    }

    /// Discard the draft without any network call.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Send the current draft as a text update.
    ///
    /// On success the matching item is replaced with the server's echo and
    /// the draft is cleared; on failure the draft stays active so no user
    /// input is lost.
    pub fn save_edit(&mut self) {
        let Some(draft) = self.editing.clone() else {
            return;
        };
        self.error = None;

        let input = UpdateTodo::edit(draft.title, non_empty(&draft.description));
        let result = self
            .api
            .build_update_todo(draft.id, &input)
            .and_then(|req| self.transport.execute(&req))
            .and_then(|resp| self.api.parse_update_todo(resp));

        match result {
            Ok(updated) => {
                self.replace_item(updated);
                self.editing = None;
            }
            Err(e) => {
                log::warn!("update failed: {e}");
                self.error = Some(UPDATE_FAILED.to_string());
            }
        }
    }

    /// Flip the completion flag of one item.
    ///
    /// Sends only `{completed}` and shows no speculative flip — the displayed
    /// state changes when the server's echo arrives, and stays put on failure.
    pub fn toggle_completed(&mut self, id: i64) {
        let Some(current) = self.items.iter().find(|t| t.id == id) else {
            return;
        };
        self.error = None;

        let input = UpdateTodo::completion(!current.completed);
        let result = self
            .api
            .build_update_todo(id, &input)
            .and_then(|req| self.transport.execute(&req))
            .and_then(|resp| self.api.parse_update_todo(resp));

        match result {
            Ok(updated) => self.replace_item(updated),
            Err(e) => {
                log::warn!("update failed: {e}");
                self.error = Some(UPDATE_FAILED.to_string());
            }
        }
    }

    /// Delete one item, gated on the external yes/no primitive.
    ///
    /// A declined confirmation sends nothing and changes nothing.
    pub fn delete(&mut self, id: i64, confirm: impl FnOnce() -> bool) {
        if !confirm() {
            return;
        }
        self.error = None;

        let req = self.api.build_delete_todo(id);
        let result = self
            .transport
            .execute(&req)
            .and_then(|resp| self.api.parse_delete_todo(resp));

        match result {
            Ok(()) => self.items.retain(|t| t.id != id),
            Err(e) => {
                log::warn!("delete failed: {e}");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Pure local transition; affects only what [`TodoApp::visible`] yields.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Clear the error text. Touches nothing else.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // -----------------------------------------------------------------------
    // Input buffers
    // -----------------------------------------------------------------------

    pub fn set_new_title(&mut self, title: impl Into<String>) {
        self.new_title = title.into();
    }

    pub fn set_new_description(&mut self, description: impl Into<String>) {
        self.new_description = description.into();
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.title = title.into();
        }
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.description = description.into();
        }
    }

    // -----------------------------------------------------------------------
    // View accessors
    // -----------------------------------------------------------------------

    /// The full list, in server order.
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// The list as the active filter shows it, order preserved.
    pub fn visible(&self) -> impl Iterator<Item = &Todo> {
        let filter = self.filter;
        self.items.iter().filter(move |t| filter.matches(t))
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn new_title(&self) -> &str {
        &self.new_title
    }

    pub fn new_description(&self) -> &str {
        &self.new_description
    }

    /// Swap in the server's representation of an item, matched by id. Items
    /// the server no longer knows are left untouched.
    fn replace_item(&mut self, updated: Todo) {
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }
}

/// Empty string normalized to `None`, matching the create form's
/// "optional description" semantics.
fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
