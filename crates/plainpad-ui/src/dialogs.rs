//! Modeless Find and Replace dialogs.
//!
//! The dialogs own only their inputs. Every action is published as an event
//! on a [`Signal`], and whoever connected to it (the editor window) performs
//! the search or the edit. `C` is the receiver handed to the handlers.

use egui::{Context, Key, Ui, Window};
use plainpad_core::{SearchDirection, SearchQuery, Signal};

/// Payload of a "Replace All" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceAllRequest {
    pub query: SearchQuery,
    pub with: String,
}

/// Find dialog: query text, direction and case sensitivity.
pub struct FindDialog<C> {
    pub visible: bool,
    pub find_text: String,
    pub direction: SearchDirection,
    pub match_case: bool,
    /// Emitted once per "Find Next" with the dialog's current query.
    pub find_requested: Signal<C, SearchQuery>,
}

impl<C> std::fmt::Debug for FindDialog<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindDialog")
            .field("visible", &self.visible)
            .field("find_text", &self.find_text)
            .field("direction", &self.direction)
            .field("match_case", &self.match_case)
            .finish_non_exhaustive()
    }
}

impl<C> Default for FindDialog<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FindDialog<C> {
    pub fn new() -> Self {
        Self {
            visible: false,
            find_text: String::new(),
            direction: SearchDirection::Forward,
            match_case: false,
            find_requested: Signal::new(),
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Whether "Find Next" is enabled.
    pub fn can_find(&self) -> bool {
        !self.find_text.is_empty()
    }

    pub fn query(&self) -> SearchQuery {
        build_query(&self.find_text, self.direction, self.match_case)
    }

    /// Publishes the current query. Does nothing while the query is empty.
    pub fn trigger_find(&mut self, target: &mut C) -> bool {
        if !self.can_find() {
            return false;
        }
        let query = self.query();
        self.find_requested.emit(target, &query);
        true
    }

    /// Shows the dialog if visible and dispatches any button press to `target`.
    pub fn show(&mut self, ctx: &Context, target: &mut C) {
        if !self.visible {
            return;
        }

        let mut open = true;
        let mut find_pressed = false;
        let mut cancel_pressed = false;
        let can_find = self.can_find();

        Window::new("Find")
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                ui.horizontal(|ui| {
                    ui.label("Find what:");
                    let response = ui.text_edit_singleline(&mut self.find_text);
                    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        find_pressed = true;
                    }
                });
                show_options(ui, &mut self.direction, &mut self.match_case);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(can_find, egui::Button::new("Find Next"))
                        .clicked()
                    {
                        find_pressed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel_pressed = true;
                    }
                });
            });

        if find_pressed {
            self.trigger_find(target);
        }
        if !open || cancel_pressed {
            self.visible = false;
        }
    }
}

/// Replace dialog: the Find inputs plus a replacement string.
pub struct ReplaceDialog<C> {
    pub visible: bool,
    pub find_text: String,
    pub replace_text: String,
    pub direction: SearchDirection,
    pub match_case: bool,
    pub find_requested: Signal<C, SearchQuery>,
    /// Carries the replacement text.
    pub replace_one_requested: Signal<C, String>,
    pub replace_all_requested: Signal<C, ReplaceAllRequest>,
}

impl<C> std::fmt::Debug for ReplaceDialog<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplaceDialog")
            .field("visible", &self.visible)
            .field("find_text", &self.find_text)
            .field("replace_text", &self.replace_text)
            .field("direction", &self.direction)
            .field("match_case", &self.match_case)
            .finish_non_exhaustive()
    }
}

impl<C> Default for ReplaceDialog<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ReplaceDialog<C> {
    pub fn new() -> Self {
        Self {
            visible: false,
            find_text: String::new(),
            replace_text: String::new(),
            direction: SearchDirection::Forward,
            match_case: false,
            find_requested: Signal::new(),
            replace_one_requested: Signal::new(),
            replace_all_requested: Signal::new(),
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Whether "Find Next" and "Replace All" are enabled.
    pub fn can_find(&self) -> bool {
        !self.find_text.is_empty()
    }

    pub fn query(&self) -> SearchQuery {
        build_query(&self.find_text, self.direction, self.match_case)
    }

    pub fn trigger_find(&mut self, target: &mut C) -> bool {
        if !self.can_find() {
            return false;
        }
        let query = self.query();
        self.find_requested.emit(target, &query);
        true
    }

    /// Publishes the replacement text. Always enabled; an empty replacement
    /// deletes the selection.
    pub fn trigger_replace(&mut self, target: &mut C) {
        let with = self.replace_text.clone();
        self.replace_one_requested.emit(target, &with);
    }

    pub fn trigger_replace_all(&mut self, target: &mut C) -> bool {
        if !self.can_find() {
            return false;
        }
        let request = ReplaceAllRequest {
            query: self.query(),
            with: self.replace_text.clone(),
        };
        self.replace_all_requested.emit(target, &request);
        true
    }

    pub fn show(&mut self, ctx: &Context, target: &mut C) {
        if !self.visible {
            return;
        }

        let mut open = true;
        let mut action = None;
        let can_find = self.can_find();

        Window::new("Find and Replace")
            .collapsible(false)
            .resizable(false)
            .default_width(400.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                egui::Grid::new("replace_inputs")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Find what:");
                        ui.text_edit_singleline(&mut self.find_text);
                        ui.end_row();
                        ui.label("Replace with:");
                        ui.text_edit_singleline(&mut self.replace_text);
                        ui.end_row();
                    });
                show_options(ui, &mut self.direction, &mut self.match_case);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(can_find, egui::Button::new("Find Next"))
                        .clicked()
                    {
                        action = Some(ReplaceAction::Find);
                    }
                    if ui.button("Replace").clicked() {
                        action = Some(ReplaceAction::ReplaceOne);
                    }
                    if ui
                        .add_enabled(can_find, egui::Button::new("Replace All"))
                        .clicked()
                    {
                        action = Some(ReplaceAction::ReplaceAll);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(ReplaceAction::Cancel);
                    }
                });
            });

        match action {
            Some(ReplaceAction::Find) => {
                self.trigger_find(target);
            }
            Some(ReplaceAction::ReplaceOne) => self.trigger_replace(target),
            Some(ReplaceAction::ReplaceAll) => {
                self.trigger_replace_all(target);
            }
            Some(ReplaceAction::Cancel) => self.visible = false,
            None => {}
        }
        if !open {
            self.visible = false;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplaceAction {
    Find,
    ReplaceOne,
    ReplaceAll,
    Cancel,
}

fn build_query(text: &str, direction: SearchDirection, match_case: bool) -> SearchQuery {
    SearchQuery {
        text: text.to_string(),
        direction,
        case_sensitive: match_case,
    }
}

/// Direction radios and the "Match case" checkbox.
fn show_options(ui: &mut Ui, direction: &mut SearchDirection, match_case: &mut bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;
        ui.checkbox(match_case, "Match case");
        ui.label("Direction:");
        ui.radio_value(direction, SearchDirection::Backward, "Up");
        ui.radio_value(direction, SearchDirection::Forward, "Down");
    });
}
