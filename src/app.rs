//! Main application UI.
//! Startup questions, study mode (browse/add/delete) and quiz mode (answer checking).

use eframe::egui;
use egui::{Color32, RichText};
use flashcards_app::config::{AppConfig, SourceChoice, StartChoice};
use flashcards_app::{AnswerOutcome, Flashcard, QuizSummary, Result, StudySession};
use std::path::Path;

/// Application screen states
#[derive(Default, PartialEq)]
enum AppScreen {
    #[default]
    StartChoice,
    SourceChoice,
    Study,
    Quiz,
}

/// User triggers, applied after the frame has been laid out
enum Action {
    Next,
    Previous,
    Flip,
    OpenAddDialog,
    RemoveCurrent,
    RemoveAll,
    EnterQuiz,
    CheckAnswer,
    ExitQuiz,
    Export,
    Import,
}

pub struct MyApp {
    session: StudySession,
    screen: AppScreen,
    pending_source: Option<SourceChoice>,

    show_confirmation_dialog: bool,
    allowed_to_close: bool,

    show_add_dialog: bool,
    new_question: String,
    new_answer: String,

    answer_input: String,
    last_outcome: Option<AnswerOutcome>,
    final_score: Option<QuizSummary>,

    /// Blocking message; everything else is disabled until it is acknowledged
    notice: Option<String>,
    /// Confirmation of a finished operation, shown the same way but not as a warning
    info: Option<String>,
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            AppScreen::StartChoice => self.render_start_screen(ctx),
            AppScreen::SourceChoice => self.render_source_screen(ctx),
            AppScreen::Study => self.render_study_screen(ctx),
            AppScreen::Quiz => self.render_quiz_screen(ctx),
        }

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if self.show_add_dialog {
            self.render_add_dialog(ctx);
        }

        if let Some(summary) = self.final_score {
            let mut close = false;
            egui::Window::new("Score")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(
                        RichText::new(format!(
                            "Final score is {}/{}",
                            summary.score, summary.total
                        ))
                        .size(18.0)
                        .strong(),
                    );
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            if close {
                self.final_score = None;
            }
        }

        if let Some(message) = &self.notice {
            let mut acknowledged = false;
            egui::Window::new("Warning")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(RichText::new(message).size(18.0).strong());
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            if acknowledged {
                self.notice = None;
            }
        }

        if let Some(message) = &self.info {
            let mut acknowledged = false;
            egui::Window::new("Done")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(RichText::new(message).size(18.0));
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            if acknowledged {
                self.info = None;
            }
        }
    }
}

impl MyApp {
    /// Creates the app and applies the startup choices given on the command line
    pub fn new(session: StudySession, config: AppConfig) -> Self {
        let mut app = Self {
            session,
            screen: AppScreen::StartChoice,
            pending_source: config.source,
            show_confirmation_dialog: false,
            allowed_to_close: false,
            show_add_dialog: false,
            new_question: String::new(),
            new_answer: String::new(),
            answer_input: String::new(),
            last_outcome: None,
            final_score: None,
            notice: None,
            info: None,
        };
        if let Some(choice) = config.start {
            app.choose_start(choice);
        }
        app
    }

    /// True while a notice or info message waits to be acknowledged
    fn message_pending(&self) -> bool {
        self.notice.is_some() || self.info.is_some()
    }

    /// Controls are only usable while no dialog is waiting for the user
    fn controls_enabled(&self) -> bool {
        !self.message_pending() && !self.show_add_dialog && self.final_score.is_none()
    }

    /// Turns a failed operation into a blocking notice
    fn report<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("{}", err);
                self.notice = Some(err.to_string());
                None
            }
        }
    }

    fn choose_start(&mut self, choice: StartChoice) {
        if choice == StartChoice::New {
            let result = self.session.start_new();
            self.report(result);
        }
        self.screen = AppScreen::SourceChoice;
        if let Some(source) = self.pending_source.take() {
            self.choose_source(source);
        }
    }

    fn choose_source(&mut self, choice: SourceChoice) {
        if let SourceChoice::File(path) = choice {
            self.import_from(&path);
        }
        self.screen = AppScreen::Study;
    }

    fn render_start_screen(&mut self, ctx: &egui::Context) {
        let enabled = !self.message_pending();
        let mut choice = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading(
                    "Do you want to create a new database of flashcards, or to use the latest created one?",
                );
                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    if ui.button("New").clicked() {
                        choice = Some(StartChoice::New);
                    }
                    if ui.button("Continue").clicked() {
                        choice = Some(StartChoice::Continue);
                    }
                });
            }));
        });
        if let Some(choice) = choice {
            self.choose_start(choice);
        }
    }

    fn render_source_screen(&mut self, ctx: &egui::Context) {
        let enabled = !self.message_pending();
        let mut choice = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading("Do you want to load flashcards from a file, or to add them manually?");
                ui.add_space(10.0);
                ui.label("Expected file content, one flashcard per line:");
                ui.monospace("What is the capital of Czech Republic?;Prague");
                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    if ui.button("File").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Text files", &["txt", "csv"])
                            .pick_file()
                        {
                            choice = Some(SourceChoice::File(path));
                        }
                    }
                    if ui.button("Manually").clicked() {
                        choice = Some(SourceChoice::Manual);
                    }
                });
            }));
        });
        if let Some(choice) = choice {
            self.choose_source(choice);
        }
    }

    /// Renders study mode: current card plus management buttons
    fn render_study_screen(&mut self, ctx: &egui::Context) {
        let enabled = self.controls_enabled();
        let mut action: Option<Action> = None;

        egui::TopBottomPanel::bottom("study_buttons").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.add_enabled_ui(enabled, |ui| {
                ui.horizontal_wrapped(|ui| {
                    if ui.button("Next").clicked() {
                        action = Some(Action::Next);
                    }
                    if ui.button("Previous").clicked() {
                        action = Some(Action::Previous);
                    }
                    if ui.button("Flip").clicked() {
                        action = Some(Action::Flip);
                    }
                    if ui.button("Add Question").clicked() {
                        action = Some(Action::OpenAddDialog);
                    }
                    if ui.button("Delete Question").clicked() {
                        action = Some(Action::RemoveCurrent);
                    }
                    if ui.button("Delete All").clicked() {
                        action = Some(Action::RemoveAll);
                    }
                    if ui.button("Quiz Mode").clicked() {
                        action = Some(Action::EnterQuiz);
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button("Export").clicked() {
                        action = Some(Action::Export);
                    }
                    if ui.button("Import").clicked() {
                        action = Some(Action::Import);
                    }
                    ui.separator();
                    ui.label(RichText::new(self.session.best_score().label()).strong());
                });
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Flashcards ({})", self.session.cards().len()));
            ui.separator();
            let navigation = self.session.navigation();
            render_card(ui, self.session.current_card(), navigation.showing_question);
        });

        if let Some(action) = action {
            self.perform(action);
        }
    }

    /// Renders quiz mode: question, answer field and running score
    fn render_quiz_screen(&mut self, ctx: &egui::Context) {
        let enabled = self.controls_enabled();
        let mut action: Option<Action> = None;
        let (summary, answered) = match self.session.quiz() {
            Some(quiz) => (quiz.summary(), quiz.is_answered()),
            None => (QuizSummary::default(), false),
        };

        egui::TopBottomPanel::top("quiz_score").show(ctx, |ui| {
            ui.label(
                RichText::new(format!("Score: {}/{}", summary.score, summary.total))
                    .size(18.0)
                    .strong(),
            );
        });

        egui::TopBottomPanel::bottom("quiz_buttons").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.add_enabled_ui(enabled, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Your answer:");
                    let input = ui.add_enabled(
                        !answered,
                        egui::TextEdit::singleline(&mut self.answer_input),
                    );
                    let submitted =
                        input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui
                        .add_enabled(!answered, egui::Button::new("Check Answer"))
                        .clicked()
                        || (submitted && !answered)
                    {
                        action = Some(Action::CheckAnswer);
                    }
                });

                if let Some(outcome) = &self.last_outcome {
                    if outcome.is_correct {
                        ui.colored_label(Color32::GREEN, "Correct!");
                    } else {
                        ui.colored_label(
                            Color32::RED,
                            format!("Incorrect! Correct answer: {}", outcome.correct_answer),
                        );
                    }
                }

                ui.horizontal(|ui| {
                    if ui.button("Next").clicked() {
                        action = Some(Action::Next);
                    }
                    if ui.button("Previous").clicked() {
                        action = Some(Action::Previous);
                    }
                    if ui.button("Return").clicked() {
                        action = Some(Action::ExitQuiz);
                    }
                });
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_card(ui, self.session.current_card(), true);
        });

        if let Some(action) = action {
            self.perform(action);
        }
    }

    fn render_add_dialog(&mut self, ctx: &egui::Context) {
        let enabled = !self.message_pending();
        let mut save = false;
        let mut cancel = false;

        egui::Window::new("Add Flashcard")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.label("Enter the question:");
                    ui.text_edit_singleline(&mut self.new_question);
                    ui.label("Enter the answer:");
                    ui.text_edit_singleline(&mut self.new_answer);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            save = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancel = true;
                        }
                    });
                });
            });

        if save {
            self.save_new_card();
        } else if cancel {
            self.close_add_dialog();
        }
    }

    /// On a validation error the dialog stays open, locked behind the notice
    fn save_new_card(&mut self) {
        let result = self.session.add_card(&self.new_question, &self.new_answer);
        if self.report(result).is_some() {
            self.close_add_dialog();
        }
    }

    fn close_add_dialog(&mut self) {
        self.new_question.clear();
        self.new_answer.clear();
        self.show_add_dialog = false;
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Next => {
                let result = self.session.next();
                self.after_move(result);
            }
            Action::Previous => {
                let result = self.session.previous();
                self.after_move(result);
            }
            Action::Flip => self.session.flip(),
            Action::OpenAddDialog => self.show_add_dialog = true,
            Action::RemoveCurrent => {
                let result = self.session.remove_current();
                self.report(result);
            }
            Action::RemoveAll => {
                if !self.session.is_empty() {
                    let result = self.session.remove_all();
                    self.report(result);
                }
            }
            Action::EnterQuiz => {
                let result = self.session.start_quiz();
                if self.report(result).is_some() {
                    self.answer_input.clear();
                    self.last_outcome = None;
                    self.screen = AppScreen::Quiz;
                }
            }
            Action::CheckAnswer => {
                let result = self.session.submit_answer(&self.answer_input);
                if let Some(outcome) = self.report(result) {
                    self.last_outcome = Some(outcome);
                }
            }
            Action::ExitQuiz => {
                self.final_score = self.session.exit_quiz();
                self.answer_input.clear();
                self.last_outcome = None;
                self.screen = AppScreen::Study;
            }
            Action::Export => self.handle_export(),
            Action::Import => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Flashcards", &["txt", "csv", "json"])
                    .pick_file()
                {
                    self.import_from(&path);
                }
            }
        }
    }

    /// A successful move in quiz mode starts a fresh attempt
    fn after_move(&mut self, result: Result<()>) {
        if self.report(result).is_some() && self.screen == AppScreen::Quiz {
            let answered = self.session.quiz().is_some_and(|quiz| quiz.is_answered());
            if !answered {
                self.answer_input.clear();
                self.last_outcome = None;
            }
        }
    }

    /// Handles export of all flashcards to a JSON file
    fn handle_export(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("flashcards.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            self.export_to(&path);
        }
    }

    fn export_to(&mut self, path: &Path) {
        let result = self.session.export_json(path);
        if self.report(result).is_some() {
            self.info = Some(format!(
                "Exported {} flashcards to {}",
                self.session.cards().len(),
                path.display()
            ));
        }
    }

    /// JSON files go through the JSON importer, anything else is read as `question;answer` lines
    fn import_from(&mut self, path: &Path) {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let result = if is_json {
            self.session.import_json(path)
        } else {
            self.session.import_text_file(path)
        };
        if let Some(count) = self.report(result) {
            log::info!("Imported {} flashcards from {}", count, path.display());
        }
    }
}

/// Draws one face of a card on its own background color
fn render_card(ui: &mut egui::Ui, card: Option<&Flashcard>, showing_question: bool) {
    let Some(card) = card else {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No flashcards available").size(24.0).strong());
        });
        return;
    };

    let fill = Color32::from_rgb(card.color.r, card.color.g, card.color.b);
    let text_color = if card.color.is_dark() {
        Color32::WHITE
    } else {
        Color32::BLACK
    };
    let (face, text) = if showing_question {
        ("Question", &card.question)
    } else {
        ("Answer", &card.answer)
    };

    egui::Frame::none()
        .fill(fill)
        .rounding(8.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(250.0);
            ui.label(
                RichText::new(format!("Flashcard number {}", card.number))
                    .color(text_color)
                    .size(18.0),
            );
            ui.add_space(20.0);
            ui.label(
                RichText::new(format!("{}:", face))
                    .color(text_color)
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(text).color(text_color).size(24.0));
        });
}
