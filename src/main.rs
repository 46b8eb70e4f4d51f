use chrono::Datelike;
use iced::keyboard::{self, key};
use iced::widget::image::Handle;
use iced::widget::{canvas, column, container, scrollable, stack, text, Space};
use iced::{event, window, Alignment, Element, Length, Point, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};

mod assets;
mod color;
mod config;
mod error;
mod state;
mod ui;

use state::data::{self, Manifest};
use state::theme::{ColorTheme, ThemeStore};
use state::viewer::{is_mobile, ViewerState};
use ui::effects::{Backdrop, PointerSpring};

/// The intro year counter starts here and races up to the current year.
const FIRST_YEAR: i32 = 2016;
const YEAR_ANIMATION_MS: u64 = 2000;

/// Identifies one loaded image: a job's round icon or one of its photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Icon { job: usize },
    Photo { job: usize, image: usize },
}

impl ImageKey {
    pub fn icon(job: usize) -> Self {
        ImageKey::Icon { job }
    }

    pub fn photo(job: usize, image: usize) -> Self {
        ImageKey::Photo { job, image }
    }
}

/// Images loaded so far, by key. Entries appear as background loads finish.
pub type ImageCache = HashMap<ImageKey, Handle>;

/// Look up a loaded image, falling back to the shared placeholder while it
/// loads (or forever, if the file is missing).
pub fn image_or_placeholder(images: &ImageCache, key: ImageKey) -> Handle {
    images.get(&key).cloned().unwrap_or_else(assets::placeholder)
}

/// The intro "engineer since 2016..." counter. Steps once per tick until
/// it reaches the current year, then the intro switches to its final text.
#[derive(Debug, Clone, Copy)]
struct YearCounter {
    year: i32,
    target: i32,
}

impl YearCounter {
    fn new() -> Self {
        let target = chrono::Local::now().year().max(FIRST_YEAR);
        YearCounter {
            year: FIRST_YEAR,
            target,
        }
    }

    fn done(&self) -> bool {
        self.year >= self.target
    }

    fn advance(&mut self) {
        if !self.done() {
            self.year += 1;
        }
    }

    /// Tick interval so the whole run takes ~2 seconds.
    fn interval(&self) -> Duration {
        let steps = (self.target - FIRST_YEAR).max(1) as u64;
        Duration::from_millis(YEAR_ANIMATION_MS / steps)
    }
}

/// Main application state
struct Folio {
    /// The injected theme preference store
    theme: ThemeStore,
    /// The image selection / expansion / fullscreen machine
    viewer: ViewerState,
    /// Static page content from the embedded manifest
    manifest: Manifest,
    /// Loaded images, filled in by background tasks
    images: ImageCache,
    /// Live window size; the mobile/desktop branch reads this at click time
    window: Size,
    year: YearCounter,
    /// Backdrop animation clock and pointer spring
    started: Instant,
    elapsed: f32,
    last_frame: Option<Instant>,
    pointer: PointerSpring,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A thumbnail in a job strip was clicked
    ThumbnailClicked { job: usize, image: usize },
    /// The inline expanded image was clicked
    LargeImageClicked,
    /// The dimmed fullscreen backdrop was clicked
    BackgroundClicked,
    EscapePressed,
    PreviousImage,
    NextImage,
    ToggleDarkMode,
    SetColorTheme(ColorTheme),
    WindowResized(Size),
    PointerMoved(Point),
    /// A background image load finished
    ImageLoaded { key: ImageKey, handle: Handle },
    /// Animation frame for the backdrop
    FrameTick(Instant),
    /// Intro year counter step
    YearTick,
}

impl Folio {
    /// Create a new instance of the application and kick off the
    /// background image loads.
    fn new() -> (Self, Task<Message>) {
        let theme = ThemeStore::load();
        let manifest = data::load_manifest_or_empty();

        let root = assets::assets_root();
        let available = assets::scan(&root);
        assets::verify_manifest(&manifest, &root);
        println!(
            "🎨 folio initialized: {} jobs, {} asset file(s), theme {}/{}",
            manifest.jobs.len(),
            available,
            if theme.is_dark() { "dark" } else { "light" },
            theme.color_theme().as_str(),
        );

        let load_tasks = spawn_image_loads(&manifest);

        (
            Folio {
                theme,
                viewer: ViewerState::default(),
                manifest,
                images: ImageCache::new(),
                window: Size::new(1280.0, 860.0),
                year: YearCounter::new(),
                started: Instant::now(),
                elapsed: 0.0,
                last_frame: None,
                pointer: PointerSpring::default(),
            },
            Task::batch(load_tasks),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailClicked { job, image } => {
                self.viewer.select(job, image, is_mobile(self.window.width));
            }
            Message::LargeImageClicked => {
                self.viewer.open_fullscreen();
            }
            Message::BackgroundClicked => {
                self.viewer.dismiss();
            }
            Message::EscapePressed => {
                self.viewer.escape(is_mobile(self.window.width));
            }
            Message::PreviousImage => {
                self.step_image(-1);
            }
            Message::NextImage => {
                self.step_image(1);
            }
            Message::ToggleDarkMode => {
                self.theme.toggle_dark_mode();
            }
            Message::SetColorTheme(theme) => {
                self.theme.set_color_theme(theme);
            }
            Message::WindowResized(size) => {
                self.window = size;
            }
            Message::PointerMoved(position) => {
                self.pointer.set_target(ui::effects::normalize_pointer(
                    position,
                    self.window.width,
                    self.window.height,
                ));
            }
            Message::ImageLoaded { key, handle } => {
                self.images.insert(key, handle);
            }
            Message::FrameTick(now) => {
                self.elapsed = now.duration_since(self.started).as_secs_f32();
                let dt = self
                    .last_frame
                    .map(|last| now.duration_since(last).as_secs_f32())
                    .unwrap_or(1.0 / 60.0);
                self.last_frame = Some(now);
                self.pointer.tick(dt);
            }
            Message::YearTick => {
                self.year.advance();
            }
        }

        Task::none()
    }

    /// Step the viewer selection within its current job.
    fn step_image(&mut self, delta: isize) {
        if let Some(selection) = self.viewer.selection() {
            let count = self
                .manifest
                .jobs
                .get(selection.job)
                .map(|job| job.images.len())
                .unwrap_or(0);
            self.viewer.step(delta, count);
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let prefs = self.theme.preference();
        let mobile = is_mobile(self.window.width);

        let mut jobs = column![].spacing(if mobile { 40 } else { 64 });
        for job in &self.manifest.jobs {
            jobs = jobs.push(ui::job::view(
                job,
                &self.viewer,
                &self.images,
                prefs,
                mobile,
            ));
        }

        let page = column![
            ui::header::view(prefs),
            self.view_intro(mobile),
            container(jobs)
                .max_width(1100)
                .padding([0, 24])
                .center_x(Length::Fill),
            Space::with_height(60),
        ]
        .spacing(if mobile { 28 } else { 48 });

        let backdrop = canvas(Backdrop {
            accent: prefs.color.accent(),
            dark: prefs.dark,
            elapsed: self.elapsed,
            offset: self.pointer.offset(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let base: Element<Message> = stack![
            backdrop,
            scrollable(page).width(Length::Fill).height(Length::Fill),
        ]
        .into();

        // Fullscreen overlay goes over everything
        match self.viewer {
            ViewerState::Fullscreen(selection) => {
                match self.manifest.jobs.get(selection.job) {
                    Some(job) => {
                        ui::viewer::fullscreen(base, job, selection, &self.images, prefs)
                    }
                    None => base,
                }
            }
            _ => base,
        }
    }

    /// Intro block: name, animated year line, contact tagline.
    fn view_intro(&self, mobile: bool) -> Element<Message> {
        let prefs = self.theme.preference();

        let year_line = if self.year.done() {
            text("engineer in nyc").size(18)
        } else {
            text(format!("engineer since {}...", self.year.year)).size(18)
        };

        column![
            text(&self.manifest.owner).size(if mobile { 44 } else { 72 }),
            year_line,
            text(&self.manifest.tagline)
                .size(15)
                .color(prefs.muted_text()),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.preference().iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Window size and pointer tracking are always on; the key listener
        // is bound only while the viewer is open, and the year ticker only
        // while the intro is still counting.
        let events = event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            event::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            _ => None,
        });

        let keys = if self.viewer.is_active() {
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(key::Named::Escape) => Some(Message::EscapePressed),
                keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::PreviousImage),
                keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::NextImage),
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let year = if self.year.done() {
            Subscription::none()
        } else {
            iced::time::every(self.year.interval()).map(|_| Message::YearTick)
        };

        let frames = window::frames().map(Message::FrameTick);

        Subscription::batch([events, keys, year, frames])
    }
}

fn main() -> iced::Result {
    iced::application("folio", Folio::update, Folio::view)
        .subscription(Folio::subscription)
        .theme(Folio::theme)
        .window_size(Size::new(1280.0, 860.0))
        .centered()
        .run_with(Folio::new)
}

/// One background load task per manifest image reference. Each task
/// resolves to a cache insert; missing files come back as placeholders.
fn spawn_image_loads(manifest: &Manifest) -> Vec<Task<Message>> {
    let mut tasks = Vec::new();

    for job in &manifest.jobs {
        if let Some(icon) = &job.icon {
            let key = ImageKey::icon(job.index);
            tasks.push(Task::perform(
                assets::load_or_placeholder(assets::resolve(icon)),
                move |handle| Message::ImageLoaded { key, handle },
            ));
        }

        for (i, path) in job.images.iter().enumerate() {
            let key = ImageKey::photo(job.index, i);
            tasks.push(Task::perform(
                assets::load_or_placeholder(assets::resolve(path)),
                move |handle| Message::ImageLoaded { key, handle },
            ));
        }
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_counter_reaches_target_and_stops() {
        let mut counter = YearCounter::new();
        assert_eq!(counter.year, FIRST_YEAR);

        for _ in 0..100 {
            counter.advance();
        }
        assert!(counter.done());
        assert_eq!(counter.year, counter.target);
    }

    #[test]
    fn test_year_counter_interval_fills_two_seconds() {
        let counter = YearCounter::new();
        let steps = (counter.target - FIRST_YEAR).max(1) as u64;
        let total = counter.interval().as_millis() as u64 * steps;
        // Integer division may shave a few ms off the total
        assert!(total <= YEAR_ANIMATION_MS);
        assert!(total >= YEAR_ANIMATION_MS.saturating_sub(steps));
    }

    #[test]
    fn test_image_key_variants_do_not_collide() {
        let mut cache = ImageCache::new();
        cache.insert(ImageKey::icon(0), assets::placeholder());
        cache.insert(ImageKey::photo(0, 0), assets::placeholder());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_miss_yields_placeholder() {
        let cache = ImageCache::new();
        let handle = image_or_placeholder(&cache, ImageKey::photo(3, 7));
        assert_eq!(handle, assets::placeholder());
    }
}
