use std::path::{Path, PathBuf};

use anyhow::Context as _;
use eframe::egui;
use egui_graph_editor::{ChoiceGraph, DialogueGraph, EditorHost, GraphEditor, GraphEditorWidget};
use egui_phosphor::regular as icons;
use log::{error, info, warn};
use story_library::{Location, Project};

use crate::config::{self, EditorConfig};
use crate::host::AppHost;
use crate::ui::menu::{self, MenuAction};
use crate::ui::prompt::{PromptOutcome, TextPrompt};
use crate::ui::record_panel;
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Locations,
    Dialogue(usize),
}

pub struct StoryEditorApp {
    project: Project,
    project_path: Option<PathBuf>,
    config: EditorConfig,
    view: View,
    locations: GraphEditor<ChoiceGraph>,
    dialogue: GraphEditor<DialogueGraph>,
    host: AppHost,
    prompt: Option<TextPrompt>,
    /// Record shown in the inspector.
    inspected: Option<String>,
}

impl StoryEditorApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: EditorConfig,
        project_path: Option<PathBuf>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        utils::setup_fonts(&cc.egui_ctx);

        let dialogue = GraphEditor::new(DialogueGraph::with_default_response(
            config.default_response.clone(),
        ));
        let mut app = Self {
            project: Project::default(),
            project_path: None,
            config,
            view: View::Locations,
            locations: GraphEditor::new(ChoiceGraph),
            dialogue,
            host: AppHost::default(),
            prompt: None,
            inspected: None,
        };

        if let Some(path) = project_path {
            if let Err(e) = app.open_project(&path) {
                error!("{e:#}");
            }
        }
        app
    }

    fn open_project(&mut self, path: &Path) -> anyhow::Result<()> {
        let project = Project::load_from_file(path)
            .with_context(|| format!("Failed to open project {}", path.display()))?;

        self.project = project;
        self.project_path = Some(path.to_path_buf());
        self.view = View::Locations;
        self.host = AppHost::default();
        self.prompt = None;
        self.inspected = None;
        self.locations.load(&mut self.project.locations);
        // Tree ids may repeat across files; start the dialogue canvas afresh.
        self.dialogue = GraphEditor::new(DialogueGraph::with_default_response(
            self.config.default_response.clone(),
        ));

        self.config.last_project = Some(path.to_path_buf());
        config::save_config(&self.config);
        Ok(())
    }

    fn save_project(&self) {
        let Some(path) = &self.project_path else {
            warn!("No project file to save to");
            return;
        };
        match self.project.save_to_file(path, self.config.pretty_print) {
            Ok(()) => info!("Project saved to {}", path.display()),
            Err(e) => error!("Failed to save project: {}", e),
        }
    }

    fn switch_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        self.view = view;
        self.prompt = None;
        self.inspected = None;
        if view == View::Locations {
            self.locations.load(&mut self.project.locations);
        }
    }

    fn run_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::OpenProject => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Project File", &["json"])
                    .pick_file()
                {
                    if let Err(e) = self.open_project(&path) {
                        error!("{e:#}");
                    }
                }
            }
            MenuAction::Save => {
                if self.project_path.is_none() {
                    self.project_path = rfd::FileDialog::new()
                        .add_filter("Project File", &["json"])
                        .set_file_name("data.json")
                        .save_file();
                }
                self.save_project();
            }
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn graph_list(&mut self, ctx: &egui::Context) {
        let mut open = None;
        let mut delete = None;
        let mut create = false;

        egui::SidePanel::left("graph_list")
            .default_width(220.0)
            .show(ctx, |ui| {
                if ui
                    .selectable_label(
                        self.view == View::Locations,
                        format!("{} Locations", icons::MAP_TRIFOLD),
                    )
                    .clicked()
                {
                    open = Some(View::Locations);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("Dialogue trees");
                    if ui.small_button(icons::PLUS).on_hover_text("New tree").clicked() {
                        create = true;
                    }
                });

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (index, tree) in self.project.dialogues.iter().enumerate() {
                        ui.horizontal(|ui| {
                            let rooted = tree.root_node_id.is_some();
                            let marker = if rooted { icons::FLAG } else { icons::WARNING };
                            let text = format!("{marker} {} ({})", tree.id, tree.nodes.len());
                            if ui
                                .selectable_label(self.view == View::Dialogue(index), text)
                                .clicked()
                            {
                                open = Some(View::Dialogue(index));
                            }
                            if ui.small_button(icons::TRASH).clicked() {
                                delete = Some(index);
                            }
                        });
                    }
                });
            });

        if create {
            let index = self.project.add_dialogue_tree();
            self.switch_view(View::Dialogue(index));
            self.save_project();
        }
        if let Some(view) = open {
            self.switch_view(view);
        }
        if let Some(index) = delete {
            self.delete_tree(index);
        }
    }

    fn delete_tree(&mut self, index: usize) {
        if !self.host.confirm_destructive("Delete this dialogue tree?") {
            return;
        }
        let tree = self.project.dialogues.remove(index);
        info!("Deleted dialogue tree {}", tree.id);

        match self.view {
            View::Dialogue(current) if current == index => self.switch_view(View::Locations),
            View::Dialogue(current) if current > index => {
                self.view = View::Dialogue(current - 1);
            }
            _ => {}
        }
        self.save_project();
    }

    fn inspector(&mut self, ctx: &egui::Context) {
        let Some(id) = self.inspected.clone() else {
            return;
        };

        egui::SidePanel::right("inspector")
            .default_width(260.0)
            .show(ctx, |ui| match self.view {
                View::Locations => {
                    let Some(location) = self.project.locations.iter_mut().find(|l| l.id == id)
                    else {
                        ui.label("Nothing selected");
                        return;
                    };
                    if record_panel::location_panel(ui, location) {
                        self.locations.load(&mut self.project.locations);
                        self.host.save_requested = true;
                    }
                }
                View::Dialogue(index) => {
                    let Some(tree) = self.project.dialogues.get_mut(index) else {
                        return;
                    };
                    let is_root = tree.root_node_id.as_deref() == Some(id.as_str());
                    let Some(node) = tree.node_mut(&id) else {
                        ui.label("Nothing selected");
                        return;
                    };
                    let response = record_panel::dialogue_node_panel(ui, node, is_root);
                    if response.make_root {
                        tree.root_node_id = Some(id.clone());
                    }
                    if response.changed || response.make_root {
                        self.dialogue.load(tree);
                        self.host.save_requested = true;
                    }
                }
            });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        match self.view {
            View::Locations => {
                GraphEditorWidget::new(&mut self.locations).show(
                    ui,
                    &mut self.project.locations,
                    &mut self.host,
                );
            }
            View::Dialogue(index) => match self.project.dialogues.get_mut(index) {
                Some(tree) => {
                    GraphEditorWidget::new(&mut self.dialogue).show(ui, tree, &mut self.host);
                }
                None => {
                    ui.centered_and_justified(|ui| ui.label("Select or create a dialogue tree"));
                }
            },
        }
    }

    fn prompt_window(&mut self, ctx: &egui::Context) {
        if let Some(request) = self.host.prompt.take() {
            self.prompt = Some(TextPrompt::from_label(&request));
        }
        let Some(prompt) = &mut self.prompt else {
            return;
        };
        let Some(outcome) = prompt.show(ctx) else {
            return;
        };
        self.prompt = None;

        let answer = match outcome {
            PromptOutcome::Submitted(text) => Some(text),
            PromptOutcome::Cancelled => None,
        };
        if let View::Dialogue(index) = self.view {
            if let Some(tree) = self.project.dialogues.get_mut(index) {
                self.dialogue.resolve_prompt(tree, &mut self.host, answer);
            }
        }
    }

    /// Acts on what the canvas asked for during this frame.
    fn handle_host_requests(&mut self) {
        if let Some(world) = self.host.create_request.take() {
            let location = Location::new_at(world.x, world.y);
            info!("Created location {}", location.id);
            self.inspected = Some(location.id.clone());
            self.project.locations.push(location);
            self.locations.load(&mut self.project.locations);
            self.host.save_requested = true;
        }
        if let Some(node) = self.host.selected.take() {
            self.inspected = Some(node);
        }
        if let Some(node) = self.host.open_request.take() {
            self.inspected = Some(node);
        }
        if std::mem::take(&mut self.host.save_requested) {
            self.save_project();
        }
    }
}

impl eframe::App for StoryEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut triggered_action = menu::shortcut_action(ctx);
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            menu::menu_bar(ui, &mut triggered_action);
        });
        if let Some(action) = triggered_action {
            self.run_action(ctx, action);
        }

        self.graph_list(ctx);
        self.inspector(ctx);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.canvas(ui));
        self.prompt_window(ctx);
        self.handle_host_requests();
    }
}
