use iced::{Element, Task, Theme};
use iced::widget::{button, checkbox, column, pick_list, row, scrollable, slider, text, text_editor};
use iced::Length;
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::{Duration, Instant};

// Declare the modules
mod state;
mod ui;

use state::cache::DiscoveryCache;
use state::filter::{self, RejectedPath};
use state::settings::{Settings, MAX_PER_PAGE_RANGE, NB_COLUMNS_RANGE};
use state::{discovery, pages};

/// What the current input resolved to, recomputed on every interaction.
#[derive(Debug)]
enum GalleryContent {
    /// No usable input yet
    Empty,
    /// Exactly one directory was given; its images come from discovery
    Folder {
        folder: PathBuf,
        images: Vec<PathBuf>,
        scan_time: Duration,
    },
    /// One or more explicit file paths were given and filtered
    Explicit {
        valid: Vec<PathBuf>,
        rejected: Vec<RejectedPath>,
    },
}

impl GalleryContent {
    /// The ordered image list this content contributes to the grid.
    fn images(&self) -> &[PathBuf] {
        match self {
            GalleryContent::Empty => &[],
            GalleryContent::Folder { images, .. } => images,
            GalleryContent::Explicit { valid, .. } => valid,
        }
    }
}

/// Main application state
struct Gallery {
    /// Raw text block: one folder path, or one image path per line
    input: text_editor::Content,
    /// Persisted control values (columns, page size, recursive flag)
    settings: Settings,
    /// Currently selected page, 0-based
    page_index: usize,
    /// Single-entry memo so page flips don't re-walk the folder
    cache: DiscoveryCache,
    /// Result of the latest evaluation pass
    content: GalleryContent,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the path text block
    InputEdited(text_editor::Action),
    /// User clicked the "Browse…" button
    BrowseFolder,
    /// Columns slider moved
    ColumnsChanged(u32),
    /// Images-per-page slider moved
    MaxPerPageChanged(u32),
    /// Recursive lookup checkbox toggled
    RecursiveToggled(bool),
    /// A page was picked from the selector
    PageSelected(usize),
}

impl Gallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        println!(
            "🖼️  Mini Gallery started ({} columns, {} images per page)",
            settings.nb_columns, settings.max_per_page
        );

        (
            Gallery {
                input: text_editor::Content::new(),
                settings,
                page_index: 0,
                cache: DiscoveryCache::new(),
                content: GalleryContent::Empty,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputEdited(action) => {
                self.input.perform(action);
            }
            Message::BrowseFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Image Folder")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.input =
                        text_editor::Content::with_text(&folder_path.display().to_string());
                }
            }
            Message::ColumnsChanged(n) => {
                self.settings.nb_columns = n;
                self.persist_settings();
            }
            Message::MaxPerPageChanged(n) => {
                self.settings.max_per_page = n;
                self.persist_settings();
            }
            Message::RecursiveToggled(on) => {
                self.settings.recursive = on;
                self.persist_settings();
            }
            Message::PageSelected(page) => {
                self.page_index = page;
            }
        }

        // One synchronous evaluation pass per interaction. All the heavy
        // lifting sits behind the discovery cache, so anything but a
        // folder/flag change is cheap.
        self.refresh();

        Task::none()
    }

    /// Re-evaluate the gallery content from the current input snapshot.
    fn refresh(&mut self) {
        let paths = filter::parse_path_input(&self.input.text());

        self.content = if paths.len() == 1 && paths[0].is_dir() {
            let folder = paths[0].clone();
            let started = Instant::now();
            let images = self
                .cache
                .get_or_discover(&folder, self.settings.recursive, discovery::find_images)
                .to_vec();
            let scan_time = started.elapsed();

            GalleryContent::Folder {
                folder,
                images,
                scan_time,
            }
        } else if !paths.is_empty() {
            let (valid, rejected) = filter::classify_paths(&paths);
            GalleryContent::Explicit { valid, rejected }
        } else {
            GalleryContent::Empty
        };

        // The image count may have changed; keep the selected page valid
        let last_page = pages::page_count(
            self.content.images().len(),
            self.settings.max_per_page as usize,
        ) - 1;
        self.page_index = self.page_index.min(last_page);
    }

    /// Write the settings file; a failure is only worth a warning.
    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            eprintln!("⚠️  Could not save settings: {e}");
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        row![self.sidebar(), self.gallery_panel()]
            .spacing(20)
            .padding(20)
            .into()
    }

    /// The control column: sliders, checkbox, page selector.
    fn sidebar(&self) -> Element<Message> {
        let nb_pages = pages::page_count(
            self.content.images().len(),
            self.settings.max_per_page as usize,
        );
        let page_choices: Vec<usize> = (0..nb_pages).collect();

        column![
            text("Gallery").size(32),
            text(format!("Number of columns: {}", self.settings.nb_columns)).size(14),
            slider(
                NB_COLUMNS_RANGE,
                self.settings.nb_columns,
                Message::ColumnsChanged
            ),
            text(format!("Max images on page: {}", self.settings.max_per_page)).size(14),
            slider(
                MAX_PER_PAGE_RANGE,
                self.settings.max_per_page,
                Message::MaxPerPageChanged
            ),
            checkbox("Recursive lookup", self.settings.recursive)
                .on_toggle(Message::RecursiveToggled),
            text("Page").size(14),
            pick_list(page_choices, Some(self.page_index), Message::PageSelected),
        ]
        .spacing(12)
        .width(Length::Fixed(220.0))
        .into()
    }

    /// The main panel: path input, diagnostics, grid, displayed paths.
    fn gallery_panel(&self) -> Element<Message> {
        let page_images = pages::paginate(
            self.content.images(),
            self.settings.max_per_page as usize,
            self.page_index,
        );

        let mut body = column![
            text("Image paths").size(16),
            text_editor(&self.input)
                .placeholder("One folder path, or one image path per line")
                .height(Length::Fixed(120.0))
                .on_action(Message::InputEdited),
            button("Browse…").on_press(Message::BrowseFolder).padding(8),
            self.status_line(),
        ]
        .spacing(12);

        // Per-path diagnostics for explicit lists
        if let GalleryContent::Explicit { rejected, .. } = &self.content {
            for r in rejected {
                body = body.push(
                    text(format!("⚠️  {} {}", r.path.display(), r.reason)).size(14),
                );
            }
        }

        body = body.push(ui::grid::image_grid(
            page_images,
            self.settings.nb_columns as usize,
        ));

        if !page_images.is_empty() {
            body = body.push(text("Displayed image paths").size(20));
            for (i, p) in page_images.iter().enumerate() {
                body = body.push(text(format!("{}: {}", i, p.display())).size(14));
            }
        }

        scrollable(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// One-line summary of what the last evaluation found.
    fn status_line(&self) -> Element<Message> {
        let message = match &self.content {
            GalleryContent::Empty => {
                String::from("Paste a folder path or a list of image paths to get started.")
            }
            GalleryContent::Folder {
                folder,
                images,
                scan_time,
            } => {
                if images.is_empty() {
                    format!("No images were found under {}", folder.display())
                } else {
                    format!(
                        "Found {} images in {} ms",
                        images.len(),
                        scan_time.as_millis()
                    )
                }
            }
            GalleryContent::Explicit { valid, .. } => {
                if valid.is_empty() {
                    String::from("No images were found in the list")
                } else {
                    format!("Showing {} listed images", valid.len())
                }
            }
        };

        text(message).size(14).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Mini Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}
