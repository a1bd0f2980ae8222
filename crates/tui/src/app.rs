//! The dashboard application: message dispatch, drawing and the event loop.
//!
//! Card actions coming from keys, card buttons, and menu entries all go
//! through one dispatch table keyed by [`CardAction`]. Clicks are resolved
//! against the same layout geometry the widgets draw with.

use std::path::PathBuf;
use std::time::Instant;

use chrono::{Datelike, Local};
use crossterm::event::Event;
use habitflow_client::{HabitClient, NewHabit};
use habitflow_config::theme::{ThemeMode, detect_ambient_mode, save_preference};
use habitflow_config::ThemeState;
use habitflow_protocol::{
    CardAction, CardRegistry, CategoryFilter, HabitError, HabitId, Message, SyncState,
    dummy::sample_completion_history,
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::{
    AppState, Modal,
    charts::{
        ChartBridge, ChartData, ChartRole, TREND_DAYS, TerminalCharts, category_data, habit_stats,
        habit_stats_data, performance_data,
    },
    event::{InputMode, event_to_message, poll_event},
    form::{FormMode, HabitForm},
    layout::{
        CONFIRM_SIZE, DashboardLayout, FORM_SIZE, MIN_HEIGHT, MIN_WIDTH, STATS_SIZE,
        advanced_filter_chip, card_buttons, card_slots, centered_rect, confirm_buttons,
        filter_chips, grid_columns, toast_area, toast_close,
    },
    lifecycle::Change,
    menu::MenuSlot,
    notification::Severity,
    terminal::AppTerminal,
    theme::Palette,
    widgets::{
        render_chart, render_confirm, render_filter_bar, render_form, render_grid,
        render_help_overlay, render_menu, render_notification, render_stats, render_status_bar,
    },
};

/// Outcome of a background persistence request.
#[derive(Debug)]
pub struct SyncReport {
    /// Card that was posted.
    pub id: HabitId,
    /// What the service answered.
    pub result: habitflow_client::Result<()>,
}

type CardHandler = fn(&mut App, HabitId, Instant);

/// Maps a card action to the method that performs it.
fn card_handler(action: CardAction) -> CardHandler {
    match action {
        CardAction::Complete => App::complete,
        CardAction::Stats => App::show_stats,
        CardAction::Menu => App::open_menu,
        CardAction::Edit => App::open_edit,
        CardAction::Skip => App::skip,
        CardAction::Duplicate => App::duplicate,
        CardAction::Remind => App::remind,
        CardAction::Delete => App::request_delete,
    }
}

/// The dashboard: state plus the slots and channels around it.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Area of the last drawn frame; clicks are resolved against it.
    last_area: Rect,
    menu: MenuSlot,
    charts: ChartBridge<TerminalCharts>,
    client: Option<HabitClient>,
    reports_tx: UnboundedSender<SyncReport>,
    reports_rx: UnboundedReceiver<SyncReport>,
    theme_path: Option<PathBuf>,
    history: Vec<u8>,
}

impl App {
    /// Creates a new application over `registry`.
    ///
    /// The dashboard charts are mounted right away. Without a client,
    /// created habits stay local.
    ///
    /// # Examples
    ///
    /// ```
    /// use habitflow_config::{ThemeMode, ThemeState};
    /// use habitflow_protocol::dummy::dummy_registry;
    /// use habitflow_tui::App;
    ///
    /// let app = App::new(dummy_registry(), ThemeState::initialize(None, ThemeMode::Dark));
    /// assert_eq!(app.state().registry().len(), 6);
    /// ```
    #[must_use]
    pub fn new(registry: CardRegistry, theme: ThemeState) -> Self {
        let (reports_tx, reports_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::new(registry, theme),
            should_quit: false,
            last_area: Rect::default(),
            menu: MenuSlot::default(),
            charts: ChartBridge::new(TerminalCharts::default(), theme.mode()),
            client: None,
            reports_tx,
            reports_rx,
            theme_path: None,
            history: sample_completion_history(TREND_DAYS - 1),
        };
        app.charts
            .mount(ChartRole::PerformanceTrend, app.performance_series());
        app.charts.mount(
            ChartRole::CategoryBreakdown,
            category_data(app.state.registry()),
        );
        app
    }

    /// Posts created habits through `client`.
    #[must_use]
    pub fn with_client(mut self, client: HabitClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Saves manual theme choices to `path`.
    #[must_use]
    pub fn with_theme_path(mut self, path: PathBuf) -> Self {
        self.theme_path = Some(path);
        self
    }

    /// Read access for rendering and tests.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the options menu slot.
    #[must_use]
    pub fn menu(&self) -> &MenuSlot {
        &self.menu
    }

    /// Returns the chart bridge.
    #[must_use]
    pub fn charts(&self) -> &ChartBridge<TerminalCharts> {
        &self.charts
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns which component receives key presses.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.menu.is_open() {
            return InputMode::Menu;
        }
        match self.state.modal {
            Some(Modal::Form(_)) => InputMode::Form,
            Some(Modal::ConfirmDelete { .. }) => InputMode::Confirm,
            Some(Modal::Stats { .. }) | None => InputMode::Normal,
        }
    }

    /// Applies one message.
    ///
    /// While help is shown, any message other than `Quit` only closes it.
    pub fn update(&mut self, msg: Message) {
        self.update_at(msg, Instant::now());
    }

    /// Same as [`update`](Self::update) with an explicit clock.
    pub fn update_at(&mut self, msg: Message, now: Instant) {
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if self.state.modal.is_some() && !Self::reaches_modal(&msg) {
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::Escape => self.escape(),
            Message::NavigateLeft if !self.menu.is_open() => self.state.navigate_left(),
            Message::NavigateRight if !self.menu.is_open() => self.state.navigate_right(),
            Message::NavigateUp => {
                if self.menu.is_open() {
                    self.menu.move_highlight(-1);
                } else {
                    self.state.navigate_up();
                }
            }
            Message::NavigateDown => {
                if self.menu.is_open() {
                    self.menu.move_highlight(1);
                } else {
                    self.state.navigate_down();
                }
            }
            Message::Select => {
                if let Some(menu) = self.menu.close() {
                    self.dispatch(menu.highlighted_action().card_action(), menu.card, now);
                }
            }
            Message::ClickAt { column, row } => self.handle_click(column, row, now),
            Message::Card(action) => {
                if let Some(id) = self.state.selected_id() {
                    self.dispatch(action, id, now);
                }
            }
            Message::NewHabit => self.open_modal(Modal::Form(HabitForm::create())),
            Message::SetFilter(filter) => self.set_filter(filter),
            Message::CycleFilter => {
                let next = self.state.registry().filter().next();
                self.set_filter(next);
            }
            Message::AdvancedFilter => {
                self.state.lifecycle.notifier_mut().notify(
                    "Advanced filtering options coming soon!",
                    Severity::Info,
                    now,
                );
            }
            Message::ToggleTheme => self.toggle_theme(),
            Message::DismissNotification => {
                self.state.lifecycle.notifier_mut().dismiss(now);
            }
            Message::Confirm { accepted } => self.answer_confirm(accepted, now),
            Message::FormInput { ch } => {
                if let Some(form) = self.state.form_mut() {
                    form.input_char(ch);
                }
            }
            Message::FormBackspace => {
                if let Some(form) = self.state.form_mut() {
                    form.backspace();
                }
            }
            Message::FormNextField => {
                if let Some(form) = self.state.form_mut() {
                    form.next_field();
                }
            }
            Message::FormPrevField => {
                if let Some(form) = self.state.form_mut() {
                    form.prev_field();
                }
            }
            Message::FormCycle { delta } => {
                if let Some(form) = self.state.form_mut() {
                    form.cycle(delta);
                }
            }
            Message::FormSubmit => self.submit_form(now),
            Message::NavigateLeft | Message::NavigateRight => {}
        }
    }

    /// Messages still handled while a modal covers the grid.
    fn reaches_modal(msg: &Message) -> bool {
        msg.is_form()
            || matches!(
                msg,
                Message::Quit
                    | Message::Escape
                    | Message::ToggleHelp
                    | Message::ClickAt { .. }
                    | Message::Confirm { .. }
                    | Message::ToggleTheme
                    | Message::DismissNotification
            )
    }

    /// Advances timers. Call once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        for change in self.state.lifecycle.tick(now) {
            self.after_change(change);
        }
    }

    /// Applies the outcome of a persistence request.
    pub fn process_report(&mut self, report: SyncReport) {
        let SyncReport { id, result } = report;
        let sync = match result {
            Ok(()) => {
                debug!(%id, "habit persisted");
                SyncState::Synced
            }
            Err(err) => {
                warn!(%id, error = %err, "habit was not persisted");
                SyncState::Failed
            }
        };
        if !self.state.lifecycle.set_sync(id, sync) {
            debug!(%id, "persistence report for a removed habit");
        }
    }

    /// Applies every persistence report that has arrived.
    ///
    /// Returns how many were applied.
    pub fn drain_reports(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(report) = self.reports_rx.try_recv() {
            self.process_report(report);
            applied += 1;
        }
        applied
    }

    fn dispatch(&mut self, action: CardAction, id: HabitId, now: Instant) {
        debug!(?action, %id, "card action");
        card_handler(action)(self, id, now);
    }

    fn apply(&mut self, result: habitflow_protocol::Result<Change>) {
        match result {
            Ok(change) => self.after_change(change),
            // validation failures were already reported to the user
            Err(err) => debug!(error = %err, "card action ignored"),
        }
    }

    /// Refreshes everything that depends on `change`.
    fn after_change(&mut self, change: Change) {
        if change.affects_dashboard() {
            self.refresh_dashboard_charts();
        }
        match change {
            Change::Created(id) => {
                self.state.select_id(id);
                self.persist(id);
            }
            Change::Completed(id) => {
                if matches!(self.state.modal, Some(Modal::Stats { card }) if card == id) {
                    self.refresh_habit_stats(id);
                }
            }
            Change::Duplicated { copy, .. } => self.state.select_id(copy),
            Change::Removed(id) => {
                self.menu.close_for(id);
                let open_on_card = match self.state.modal {
                    Some(Modal::Stats { card } | Modal::ConfirmDelete { card, .. }) => card == id,
                    Some(Modal::Form(ref form)) => form.mode() == FormMode::Edit(id),
                    None => false,
                };
                if open_on_card {
                    self.close_modal();
                }
            }
            Change::Edited(_)
            | Change::RemovalScheduled(_)
            | Change::Skipped(_)
            | Change::Reminded(_)
            | Change::Unchanged => {}
        }
        self.state.clamp_selection();
    }

    fn performance_series(&self) -> ChartData {
        performance_data(
            &self.history,
            self.state.registry(),
            Local::now().date_naive(),
        )
    }

    fn refresh_dashboard_charts(&mut self) {
        let trend = self.performance_series();
        let categories = category_data(self.state.registry());
        self.charts.update_data(ChartRole::PerformanceTrend, trend);
        self.charts
            .update_data(ChartRole::CategoryBreakdown, categories);
    }

    fn refresh_habit_stats(&mut self, id: HabitId) {
        if let Ok(card) = self.state.lifecycle.card(id) {
            let stats = habit_stats(card, Local::now().weekday());
            self.charts
                .update_data(ChartRole::HabitStats, habit_stats_data(&stats));
        }
    }

    /// Posts a created card in the background.
    fn persist(&mut self, id: HabitId) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let Some(card) = self.state.registry().get(id) else {
            return;
        };
        let habit = NewHabit::from_card(card);
        self.state.lifecycle.set_sync(id, SyncState::Pending);

        let reports = self.reports_tx.clone();
        tokio::spawn(async move {
            let result = client.create_habit(&habit).await;
            // the receiver only goes away on shutdown
            let _ = reports.send(SyncReport { id, result });
        });
    }

    // --- card actions ---

    fn complete(&mut self, id: HabitId, now: Instant) {
        let result = self.state.lifecycle.complete(id, now);
        self.apply(result);
    }

    fn show_stats(&mut self, id: HabitId, _now: Instant) {
        let Ok(card) = self.state.lifecycle.card(id) else {
            return;
        };
        let stats = habit_stats(card, Local::now().weekday());
        self.open_modal(Modal::Stats { card: id });
        self.charts
            .mount(ChartRole::HabitStats, habit_stats_data(&stats));
    }

    fn open_menu(&mut self, id: HabitId, _now: Instant) {
        if self.state.lifecycle.card(id).is_err() {
            return;
        }
        let anchor = self.menu_anchor(id);
        self.menu.open(id, anchor, self.last_area);
    }

    fn open_edit(&mut self, id: HabitId, _now: Instant) {
        if let Ok(card) = self.state.lifecycle.card(id) {
            let form = HabitForm::edit(card);
            self.open_modal(Modal::Form(form));
        }
    }

    fn skip(&mut self, id: HabitId, now: Instant) {
        let result = self.state.lifecycle.skip(id, now);
        self.apply(result);
    }

    fn duplicate(&mut self, id: HabitId, now: Instant) {
        let result = self.state.lifecycle.duplicate(id, now);
        self.apply(result);
    }

    fn remind(&mut self, id: HabitId, now: Instant) {
        let result = self.state.lifecycle.remind(id, now);
        self.apply(result);
    }

    fn request_delete(&mut self, id: HabitId, _now: Instant) {
        if let Ok(prompt) = self.state.lifecycle.request_delete(id) {
            self.open_modal(Modal::ConfirmDelete { card: id, prompt });
        }
    }

    // --- modals ---

    fn open_modal(&mut self, modal: Modal) {
        self.menu.close();
        self.close_modal();
        self.state.open_modal(modal);
    }

    fn close_modal(&mut self) {
        if let Some(Modal::Stats { .. }) = self.state.close_modal() {
            self.charts.unmount(ChartRole::HabitStats);
        }
    }

    fn answer_confirm(&mut self, accepted: bool, now: Instant) {
        let Some(Modal::ConfirmDelete { card, .. }) = self.state.modal else {
            return;
        };
        self.close_modal();
        let result = self.state.lifecycle.confirm_delete(card, accepted, now);
        self.apply(result);
    }

    fn submit_form(&mut self, now: Instant) {
        let Some(Modal::Form(form)) = &self.state.modal else {
            return;
        };
        let draft = form.to_draft();
        let result = match form.mode() {
            FormMode::Create => self.state.lifecycle.create(&draft, now),
            FormMode::Edit(id) => self.state.lifecycle.edit(id, &draft, now),
        };
        match result {
            // keep the form open so the user can fix the title
            Err(HabitError::Validation(_)) => {}
            result => {
                self.close_modal();
                self.apply(result);
            }
        }
    }

    fn escape(&mut self) {
        if self.menu.close().is_some() {
            return;
        }
        if self.state.modal.is_some() {
            self.close_modal();
            return;
        }
        self.state.clear_selection();
    }

    fn set_filter(&mut self, filter: CategoryFilter) {
        debug!(filter = filter.label(), "filter changed");
        self.menu.close();
        self.state.lifecycle.set_filter(filter);
        self.state.clamp_selection();
    }

    fn toggle_theme(&mut self) {
        let mode = self.state.theme.toggle();
        info!(theme = mode.display_name(), "theme toggled");
        if let Some(path) = &self.theme_path {
            if let Err(err) = save_preference(path, mode) {
                warn!(error = %err, "failed to save theme preference");
            }
        }
        self.charts.apply_theme(mode);
    }

    /// Follows a change of the terminal's own light/dark preference.
    ///
    /// Ignored once the user has toggled the theme. Nothing is saved.
    pub fn ambient_theme(&mut self, ambient: ThemeMode) {
        if self.state.theme.ambient_changed(ambient) {
            debug!(theme = ambient.display_name(), "following ambient theme");
            self.charts.apply_theme(ambient);
        }
    }

    // --- hit testing ---

    fn menu_anchor(&self, id: HabitId) -> Rect {
        let registry = self.state.registry();
        DashboardLayout::compute(self.last_area)
            .and_then(|layout| {
                let index = registry.visible_index(id)?;
                card_slots(layout.grid, registry.visible_len(), self.state.selected)
                    .into_iter()
                    .find(|(i, _)| *i == index)
            })
            .map_or_else(
                || centered_rect(3, 1, self.last_area),
                |(_, rect)| card_buttons(rect).menu,
            )
    }

    fn modal_area(&self, modal: &Modal) -> Rect {
        let (width, height) = match modal {
            Modal::Form(_) => FORM_SIZE,
            Modal::ConfirmDelete { .. } => CONFIRM_SIZE,
            Modal::Stats { .. } => STATS_SIZE,
        };
        centered_rect(width, height, self.last_area)
    }

    /// Handles a left click at the given cell.
    ///
    /// The innermost region wins: toast, open menu, open modal, filter
    /// chips, card buttons, then card bodies.
    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let position = Position::new(column, row);

        if let Some(notification) = self.state.lifecycle.notifier().current() {
            let width = u16::try_from(notification.message.chars().count()).unwrap_or(u16::MAX);
            let toast = toast_area(self.last_area, width);
            if toast_close(toast).contains(position) {
                self.state.lifecycle.notifier_mut().dismiss(now);
                return;
            }
            if toast.contains(position) {
                return;
            }
        }

        if let Some(menu) = self.menu.active().copied() {
            if let Some(action) = menu.action_at(column, row) {
                self.menu.close();
                self.dispatch(action.card_action(), menu.card, now);
                return;
            }
            if menu.contains(column, row) {
                return;
            }
            // an anchor click reopens the menu through the card button below
            if !menu.anchor.contains(position) {
                self.menu.close();
            }
        }

        if let Some(modal) = &self.state.modal {
            let area = self.modal_area(modal);
            let confirming = matches!(modal, Modal::ConfirmDelete { .. });
            if confirming {
                let (cancel, delete) = confirm_buttons(area);
                if delete.contains(position) {
                    self.answer_confirm(true, now);
                } else if cancel.contains(position) || !area.contains(position) {
                    self.answer_confirm(false, now);
                }
            } else if !area.contains(position) {
                self.close_modal();
            }
            return;
        }

        let Some(layout) = DashboardLayout::compute(self.last_area) else {
            return;
        };

        if layout.filter_bar.contains(position) {
            if let Some((filter, _)) = filter_chips(layout.filter_bar)
                .into_iter()
                .find(|(_, rect)| rect.contains(position))
            {
                self.set_filter(filter);
            } else if advanced_filter_chip(layout.filter_bar).contains(position) {
                self.update_at(Message::AdvancedFilter, now);
            }
            return;
        }

        let registry = self.state.registry();
        let hit = card_slots(layout.grid, registry.visible_len(), self.state.selected)
            .into_iter()
            .find(|(_, rect)| rect.contains(position));
        let Some((index, rect)) = hit else {
            return;
        };
        let Some(id) = registry.visible_at(index).map(|card| card.id) else {
            return;
        };
        self.state.selected = Some(index);

        let buttons = card_buttons(rect);
        let action = if buttons.complete.contains(position) {
            Some(CardAction::Complete)
        } else if buttons.stats.contains(position) {
            Some(CardAction::Stats)
        } else if buttons.menu.contains(position) {
            Some(CardAction::Menu)
        } else {
            None
        };
        if let Some(action) = action {
            self.dispatch(action, id, now);
        }
    }

    // --- rendering ---

    /// Draws the whole dashboard from the current state.
    ///
    /// Below the minimum size only a "terminal too small" message is shown.
    /// Charts appear when the terminal is tall enough.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let Some(layout) = DashboardLayout::compute(area) else {
            self.render_size_warning(frame, area);
            return;
        };
        self.state.grid_columns = grid_columns(layout.grid.width);

        let palette = Palette::for_mode(self.state.theme.mode());
        let input_mode = self.input_mode();
        let buf = frame.buffer_mut();
        buf.set_style(
            area,
            Style::default().bg(palette.background).fg(palette.text),
        );

        self.render_header(layout.header, buf, &palette);
        render_filter_bar(
            self.state.registry().filter(),
            layout.filter_bar,
            buf,
            &palette,
        );
        render_grid(
            &self.state.lifecycle,
            self.state.selected,
            layout.grid,
            buf,
            &palette,
        );
        if let Some(charts) = layout.charts {
            self.render_dashboard_charts(charts, buf);
        }
        render_status_bar(input_mode, layout.status_bar, buf, &palette);

        if let Some(menu) = self.menu.active() {
            render_menu(menu, buf, &palette);
        }
        self.render_modal(area, buf, &palette);
        if let Some(notification) = self.state.lifecycle.notifier().current() {
            render_notification(notification, area, buf, &palette);
        }
        if self.state.help_visible {
            render_help_overlay(area, buf, &palette);
        }
    }

    fn render_modal(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        match &self.state.modal {
            Some(Modal::Form(form)) => {
                render_form(form, area, buf, palette);
            }
            Some(Modal::ConfirmDelete { prompt, .. }) => {
                render_confirm(prompt, area, buf, palette);
            }
            Some(Modal::Stats { card }) => {
                if let Ok(card) = self.state.lifecycle.card(*card) {
                    let stats = habit_stats(card, Local::now().weekday());
                    let chart = self.charts.backend().get(ChartRole::HabitStats);
                    render_stats(card, &stats, chart, area, buf, palette);
                }
            }
            None => {}
        }
    }

    fn render_dashboard_charts(&self, area: Rect, buf: &mut Buffer) {
        let [trend_area, category_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);
        let backend = self.charts.backend();
        if let Some(chart) = backend.get(ChartRole::PerformanceTrend) {
            render_chart(ChartRole::PerformanceTrend, chart, trend_area, buf);
        }
        if let Some(chart) = backend.get(ChartRole::CategoryBreakdown) {
            render_chart(ChartRole::CategoryBreakdown, chart, category_area, buf);
        }
    }

    fn render_size_warning(&self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_mode(self.state.theme.mode());
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let warning = Paragraph::new(message)
            .style(Style::default().fg(palette.warning))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // two lines of text
        let top = area.height.saturating_sub(2) / 2;
        let [_, text_area] =
            Layout::vertical([Constraint::Length(top), Constraint::Fill(1)]).areas(area);
        frame.render_widget(warning, text_area);
    }

    /// Renders the header bar with title, progress summary, and help cue.
    fn render_header(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, summary_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(28),
            Constraint::Length(26),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(
                "habitflow",
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Dashboard", Style::default().fg(palette.text)),
        ]))
        .render(title_area, buf);

        let registry = self.state.registry();
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}/{} done", registry.completed_count(), registry.len()),
                Style::default().fg(palette.success),
            ),
            Span::styled(
                format!(" · {}% today", registry.completion_rate()),
                Style::default().fg(palette.text_muted),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(summary_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} · ", self.state.theme.mode().display_name()),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled("Press ", Style::default().fg(palette.text_muted)),
            Span::styled("?", Style::default().fg(palette.warning)),
            Span::styled(" for help", Style::default().fg(palette.text_muted)),
        ]))
        .alignment(Alignment::Right)
        .render(help_area, buf);
    }

    /// Draws, polls one event, applies persistence reports and timers,
    /// until a `Quit` message arrives.
    ///
    /// # Errors
    ///
    /// Fails when drawing or polling the terminal fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use habitflow_config::{ThemeMode, ThemeState};
    /// use habitflow_protocol::dummy::dummy_registry;
    /// use habitflow_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let theme = ThemeState::initialize(None, ThemeMode::Light);
    ///     let mut app = App::new(dummy_registry(), theme);
    ///     let mut screen = terminal::setup_terminal()?;
    ///     app.run(&mut screen).await?;
    ///     terminal::restore_terminal(&mut screen)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!("dashboard started");
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                if matches!(event, Event::FocusGained) {
                    self.ambient_theme(detect_ambient_mode());
                } else if let Some(msg) = event_to_message(&event, self.input_mode()) {
                    self.update(msg);
                }
            }

            self.drain_reports();
            self.tick(Instant::now());

            if self.should_quit {
                break;
            }
            tokio::task::yield_now().await;
        }
        info!("dashboard closed");
        Ok(())
    }
}
