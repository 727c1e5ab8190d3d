use iced::alignment::{Horizontal, Vertical};
use iced::widget::{canvas, column, container, image, stack, text, Space};
use iced::{
    event, mouse, window, ContentFit, Element, Event, Length, Padding, Size, Subscription, Task,
    Theme,
};
use iced_aw::Wrap;

mod config;
mod fetch;
mod state;
mod ui;

use config::ViewerConfig;
use fetch::{fetch_frame, DecodedFrame, FetchError};
use state::cache::FrameCache;
use state::catalog::{FrameSet, FrameSource};
use state::preload::{self, PreloadScheduler};
use state::progress::LoadProgress;
use state::rotation::RotationController;
use ui::spinner::SpinnerOverlay;

/// Height of the spinner area
const SPINNER_HEIGHT: f32 = 500.0;

/// Frames are never drawn wider than this
const FRAME_MAX_WIDTH: f32 = 400.0;

/// Page column widths. The details column moves below the spinner when
/// both do not fit side by side.
const SPINNER_WIDTH: f32 = 550.0;
const DETAILS_WIDTH: f32 = 300.0;

/// Main application state
struct SpinViewer {
    config: ViewerConfig,
    source: FrameSource,
    /// Index of the selected variant in `config.variants`
    selected: usize,
    /// Frames of the selected variant
    frames: FrameSet,
    rotation: RotationController,
    progress: LoadProgress,
    cache: FrameCache,
    preload: PreloadScheduler,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Pointer went down over the spinner at this window X
    DragStarted(f32),
    /// Pointer moved anywhere in the window while dragging
    PointerMoved(f32),
    /// Follow-up of a pointer move: recompute the frame index
    ApplyRotation,
    /// Pointer released anywhere in the window
    PointerReleased,
    /// User clicked a fabric swatch
    VariantSelected(usize),
    /// A frame download finished (on screen or preload)
    FrameFetched(String, Result<DecodedFrame, FetchError>),
    /// The preload delay elapsed for these URLs
    PreloadDue(Vec<String>),
}

impl SpinViewer {
    /// Create a new instance of the application
    fn new(config: ViewerConfig) -> (Self, Task<Message>) {
        let source = config.frame_source();
        let rotation = RotationController::new(config.frame_count, config.sensitivity);
        let preload = PreloadScheduler::new(config.preload_delay());

        log::info!(
            "🎨 Spin viewer for {} ({} variants, {} frames each)",
            config.product_id,
            config.variants.len(),
            config.frame_count
        );

        let mut viewer = SpinViewer {
            config,
            source,
            selected: 0,
            frames: FrameSet::default(),
            rotation,
            progress: LoadProgress::new(0),
            cache: FrameCache::new(),
            preload,
        };

        // Visible variant first, then everything else once the delay is up
        let load = viewer.select_variant(0);
        let preload = viewer.schedule_preload();

        (viewer, Task::batch([load, preload]))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DragStarted(x) => {
                self.rotation.begin_drag(x);
                log::debug!("✋ Drag started at x={} on frame {}", x, self.rotation.index());
                Task::none()
            }
            Message::PointerMoved(x) => {
                // Only record the position here; the index is computed in a
                // follow-up so input handling stays cheap
                if self.rotation.track(x) {
                    Task::done(Message::ApplyRotation)
                } else {
                    Task::none()
                }
            }
            Message::ApplyRotation => {
                self.rotation.apply();
                Task::none()
            }
            Message::PointerReleased => {
                if self.rotation.is_dragging() {
                    log::debug!("✋ Drag ended on frame {}", self.rotation.index());
                }
                self.rotation.end_drag();
                Task::none()
            }
            Message::VariantSelected(index) => self.select_variant(index),
            Message::FrameFetched(url, result) => {
                let cached = self.cache.finish(&url, result);

                if cached && self.frames.contains(&url) {
                    self.progress.record_loaded();
                    if self.progress.is_complete() {
                        log::info!(
                            "✅ All {} frames of {} loaded",
                            self.progress.total(),
                            self.variant_name()
                        );
                    }
                }

                Task::none()
            }
            Message::PreloadDue(urls) => {
                let max_edge = self.config.max_frame_edge;
                let tasks: Vec<Task<Message>> = urls
                    .into_iter()
                    .filter(|url| self.cache.begin(url))
                    .map(|url| fetch_task(url, max_edge))
                    .collect();

                log::info!(
                    "⏳ Preloading {} of {} requested frames ({} cached, {} in flight)",
                    tasks.len(),
                    self.preload.requested_count(),
                    self.cache.len(),
                    self.cache.in_flight_count()
                );
                Task::batch(tasks)
            }
        }
    }

    /// Make `index` the visible variant and start loading its frames
    fn select_variant(&mut self, index: usize) -> Task<Message> {
        let Some(variant) = self.config.variants.get(index) else {
            log::warn!("⚠️  No variant at index {}", index);
            return Task::none();
        };

        self.selected = index;
        self.frames = self.source.frame_set(variant);
        self.rotation.set_frame_count(self.frames.len());
        self.progress.reset(self.frames.len());

        let max_edge = self.config.max_frame_edge;
        let mut tasks = Vec::new();
        for url in self.frames.urls() {
            if self.cache.contains(url) {
                self.progress.record_loaded();
            } else if self.cache.begin(url) {
                tasks.push(fetch_task(url.clone(), max_edge));
            }
        }

        log::info!(
            "🪑 Showing {} ({} of {} frames cached)",
            variant.name,
            self.progress.loaded(),
            self.progress.total()
        );

        Task::batch(tasks)
    }

    /// Hand the full catalog to the preload scheduler
    fn schedule_preload(&mut self) -> Task<Message> {
        let all_urls = self.source.all_urls(&self.config.variants);

        match self.preload.observe(&all_urls) {
            Some(batch) => Task::perform(preload::wait_for(batch), Message::PreloadDue),
            None => Task::none(),
        }
    }

    fn variant_name(&self) -> &str {
        self.config
            .variants
            .get(self.selected)
            .map(|variant| variant.name.as_str())
            .unwrap_or_default()
    }

    /// Listen to the whole window while a drag is open so the gesture
    /// survives the pointer leaving the spinner
    fn subscription(&self) -> Subscription<Message> {
        if !self.rotation.is_dragging() {
            return Subscription::none();
        }

        event::listen_with(drag_event)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let current = self
            .frames
            .url(self.rotation.index())
            .and_then(|url| self.cache.get(url));

        let frame: Element<Message> = match current {
            Some(handle) => container(
                container(
                    image(handle.clone())
                        .content_fit(ContentFit::Contain)
                        .width(Length::Fill)
                        .height(Length::Fill),
                )
                .max_width(FRAME_MAX_WIDTH),
            )
            .center_x(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => Space::new(Length::Fill, Length::Fill).into(),
        };

        let hint = container(ui::spinner::drag_hint())
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(Padding {
                top: 0.0,
                right: 0.0,
                bottom: 15.0,
                left: 0.0,
            });

        let overlay = canvas(SpinnerOverlay {
            affordance: self.rotation.affordance(),
            progress: self.progress.bar_percent(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let spinner = stack![frame, hint, overlay]
            .width(Length::Fixed(SPINNER_WIDTH))
            .height(Length::Fixed(SPINNER_HEIGHT));

        let details = column![
            text(&self.config.title).size(30),
            text("BASE FABRIC").size(10),
            ui::swatches::swatches(&self.config.variants, self.selected),
        ]
        .spacing(12)
        .width(Length::Fixed(DETAILS_WIDTH));

        let columns: Vec<Element<'_, Message>> = vec![spinner.into(), details.into()];
        let content = Wrap::with_elements(columns)
            .spacing(50.0)
            .line_spacing(30.0);

        let page = container(content).padding(Padding {
            top: 50.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        });

        container(container(page).max_width(1000.0))
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Map window events to drag messages while a drag is open
fn drag_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}

/// Download one frame and report back with its URL
fn fetch_task(url: String, max_edge: u32) -> Task<Message> {
    Task::perform(
        async move {
            let result = fetch_frame(url.clone(), max_edge).await;
            (url, result)
        },
        |(url, result)| Message::FrameFetched(url, result),
    )
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::load_or_default();

    iced::application("Spin Viewer", SpinViewer::update, SpinViewer::view)
        .subscription(SpinViewer::subscription)
        .theme(SpinViewer::theme)
        .window_size(Size::new(1100.0, 680.0))
        .centered()
        .run_with(move || SpinViewer::new(config))
}
