use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use egui::Color32;
use log::{error, warn};

use crate::color::Color;
use crate::config::{
    CANVAS_PRESETS, DEFAULT_PALETTE, EditorSettings, ZOOM_LEVELS, clamp_custom_dimension, zoom_in,
    zoom_out,
};
use crate::editor::Editor;
use crate::export::{export_file_name, save_png};
use crate::grid::Cell;
use crate::input::{CanvasMapper, Shortcut, shortcut_for};
use crate::palette::RecentColors;
use crate::renderer::CanvasRenderer;
use crate::tool::Tool;

const SWATCH_SIZE: f32 = 18.0;

/// The editor window: panels around a zoomable pixel canvas.
///
/// Only the settings are persisted between runs; the drawing itself is not.
pub struct PixelForgeApp {
    settings: EditorSettings,
    editor: Editor,
    renderer: CanvasRenderer,
    recent: RecentColors,
    /// Colors reported by the eyedropper since the last frame
    picked: Rc<RefCell<Vec<Color>>>,
    preset: String,
    custom_width: String,
    custom_height: String,
    /// Cell of the last pointer event forwarded to the editor
    last_cell: Option<Cell>,
    status: Option<String>,
}

impl PixelForgeApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let stored = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let (settings, editor) = match Editor::from_settings(&stored) {
            Ok(editor) => (stored, editor),
            Err(err) => {
                warn!("Discarding stored settings: {}", err);
                (EditorSettings::default(), Editor::default())
            }
        };

        let picked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&picked);
        editor.on_color_picked(move |color| sink.borrow_mut().push(color));

        let mut recent = RecentColors::default();
        recent.push(settings.current_color);

        Self {
            preset: format!("{}x{}", settings.canvas_width, settings.canvas_height),
            custom_width: settings.canvas_width.to_string(),
            custom_height: settings.canvas_height.to_string(),
            settings,
            editor,
            renderer: CanvasRenderer::new(&cc.egui_ctx),
            recent,
            picked,
            last_cell: None,
            status: None,
        }
    }

    fn select_tool(&mut self, tool: Tool) {
        self.editor.set_tool(tool);
    }

    fn choose_color(&mut self, color: Color) {
        self.editor.set_color(color);
        self.recent.push(color);
    }

    fn resize(&mut self, width: usize, height: usize) {
        match self.editor.configure_canvas(width, height) {
            Ok(()) => {
                self.settings.canvas_width = width;
                self.settings.canvas_height = height;
                self.custom_width = width.to_string();
                self.custom_height = height.to_string();
                self.last_cell = None;
                self.status = None;
            }
            Err(err) => {
                error!("Canvas resize rejected: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    fn export(&mut self) {
        let image = self.editor.export_image(self.settings.background_color);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let path = PathBuf::from(export_file_name(millis));

        self.status = Some(match save_png(&image, &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => {
                error!("Export failed: {}", err);
                err.to_string()
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Typing into the size fields must not switch tools
        if ctx.wants_keyboard_input() {
            return;
        }

        let presses: Vec<(egui::Key, egui::Modifiers)> = ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });

        for (key, modifiers) in presses {
            match shortcut_for(key, modifiers) {
                Some(Shortcut::SelectTool(tool)) => self.select_tool(tool),
                Some(Shortcut::Undo) => {
                    self.editor.undo();
                }
                Some(Shortcut::Redo) => {
                    self.editor.redo();
                }
                None => {}
            }
        }
    }

    /// Forward primary-button activity on the canvas to the editor as cell events
    fn handle_pointer(
        &mut self,
        ctx: &egui::Context,
        response: &egui::Response,
        mapper: &CanvasMapper,
    ) {
        let (pressed, down, released, pos) = ctx.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_down(),
                input.pointer.primary_released(),
                input.pointer.latest_pos(),
            )
        });

        if pressed && response.hovered() {
            if let Some(pos) = pos {
                let cell = mapper.cell_at(pos);
                self.editor.pointer_down(cell);
                self.last_cell = Some(cell);
            }
            return;
        }

        if !self.editor.state().is_dragging() {
            return;
        }

        let Some(pos) = pos.filter(|pos| mapper.contains(*pos)) else {
            self.editor.pointer_leave();
            self.last_cell = None;
            return;
        };

        let cell = mapper.cell_at(pos);
        if released || !down {
            self.editor.pointer_up(cell);
            self.last_cell = None;
        } else if self.last_cell != Some(cell) {
            self.editor.pointer_move(cell);
            self.last_cell = Some(cell);
        }
    }

    fn tools_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tools");
        ui.separator();

        for tool in Tool::ALL {
            let text = format!("{} ({})", tool.label(), tool.shortcut());
            if ui.selectable_label(self.editor.tool() == tool, text).clicked() {
                self.select_tool(tool);
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.editor.can_undo(), egui::Button::new("⟲ Undo"))
                .clicked()
            {
                self.editor.undo();
            }
            if ui
                .add_enabled(self.editor.can_redo(), egui::Button::new("⟳ Redo"))
                .clicked()
            {
                self.editor.redo();
            }
        });

        ui.separator();
        ui.heading("Color");
        let mut rgb = self.editor.color().channels().unwrap_or([0, 0, 0]);
        let mut edited = None;
        ui.horizontal(|ui| {
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                edited = Some(Color::from(rgb));
            }
            ui.monospace(self.editor.color().to_hex());
        });

        ui.label("Palette");
        if let Some(color) = swatches(ui, DEFAULT_PALETTE.iter().copied()) {
            edited = Some(color);
        }

        if !self.recent.is_empty() {
            ui.label("Recent");
            let recent: Vec<Color> = self.recent.iter().collect();
            if let Some(color) = swatches(ui, recent.into_iter()) {
                edited = Some(color);
            }
        }

        if let Some(color) = edited {
            self.choose_color(color);
        }
    }

    fn settings_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Canvas");
        ui.separator();

        let zoom = self.settings.zoom;
        let (min_zoom, max_zoom) = (ZOOM_LEVELS[0], ZOOM_LEVELS[ZOOM_LEVELS.len() - 1]);
        ui.horizontal(|ui| {
            ui.label("Zoom");
            if ui
                .add_enabled(zoom > min_zoom, egui::Button::new("-"))
                .clicked()
            {
                self.settings.zoom = zoom_out(zoom);
            }
            ui.monospace(format!("{}x", zoom));
            if ui
                .add_enabled(zoom < max_zoom, egui::Button::new("+"))
                .clicked()
            {
                self.settings.zoom = zoom_in(zoom);
            }
        });
        ui.checkbox(&mut self.settings.grid_enabled, "Show grid");

        ui.separator();
        let mut chosen = None;
        egui::ComboBox::from_label("Size")
            .selected_text(self.preset.clone())
            .show_ui(ui, |ui| {
                for preset in &CANVAS_PRESETS {
                    let text = format!("{} ({})", preset.name, preset.label);
                    if ui.selectable_label(self.preset == preset.name, text).clicked() {
                        chosen = Some(*preset);
                    }
                }
            });
        if let Some(preset) = chosen {
            self.preset = preset.name.to_owned();
            self.resize(preset.width, preset.height);
        }

        ui.horizontal(|ui| {
            ui.add(size_field(&mut self.custom_width));
            ui.label("x");
            ui.add(size_field(&mut self.custom_height));
        });
        if ui.button("Apply custom size").clicked() {
            let width = clamp_custom_dimension(&self.custom_width);
            let height = clamp_custom_dimension(&self.custom_height);
            self.preset = "custom".to_owned();
            self.resize(width, height);
        }

        ui.separator();
        ui.label("Background");
        let mut transparent = self.settings.background_color.is_transparent();
        if ui.checkbox(&mut transparent, "Transparent").changed() {
            self.settings.background_color = if transparent {
                Color::Transparent
            } else {
                Color::WHITE
            };
        }
        if let Some(mut rgb) = self.settings.background_color.channels() {
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                self.settings.background_color = Color::from(rgb);
            }
        }

        ui.separator();
        if ui.button("🗑 Clear canvas").clicked() {
            self.editor.clear();
        }
        if ui.button("💾 Export PNG").clicked() {
            self.export();
        }

        if let Some(status) = &self.status {
            ui.separator();
            ui.small(status.as_str());
        }
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let zoom = self.settings.zoom as f32;
        let size = egui::vec2(
            self.editor.width() as f32 * zoom,
            self.editor.height() as f32 * zoom,
        );

        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
                let mapper = CanvasMapper::new(
                    response.rect,
                    zoom,
                    self.editor.width(),
                    self.editor.height(),
                );

                self.handle_pointer(ui.ctx(), &response, &mapper);
                self.renderer.render(
                    &painter,
                    &mapper,
                    self.editor.display_grid(),
                    self.settings.background_color,
                    self.settings.grid_enabled,
                );
            });
    }

    /// Keep the persisted settings in step with the editor and collect picked colors
    fn sync(&mut self) {
        for color in self.picked.take() {
            self.recent.push(color);
        }
        self.settings.tool = self.editor.tool();
        self.settings.current_color = self.editor.color();
    }
}

fn size_field(text: &mut String) -> egui::TextEdit<'_> {
    egui::TextEdit::singleline(text).desired_width(40.0)
}

/// A wrapped row of clickable color squares; returns the clicked color
fn swatches(ui: &mut egui::Ui, colors: impl Iterator<Item = Color>) -> Option<Color> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for color in colors {
            let size = egui::Vec2::splat(SWATCH_SIZE);
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            ui.painter().rect_filled(rect, 2.0, Color32::from(color));
            if response.on_hover_text(color.to_hex()).clicked() {
                clicked = Some(color);
            }
        }
    });
    clicked
}

impl eframe::App for PixelForgeApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Pixel Forge");
                ui.monospace(format!("{}x{}", self.editor.width(), self.editor.height()));
            });
        });

        egui::SidePanel::left("tools")
            .resizable(false)
            .show(ctx, |ui| self.tools_ui(ui));

        egui::SidePanel::right("canvas_settings")
            .resizable(false)
            .show(ctx, |ui| self.settings_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.canvas_ui(ui));

        self.sync();
    }
}
