/// One work-history section: icon, title/date/description, and the
/// thumbnail strip. Desktop lays everything out in a single row with the
/// thumbnails on the right; below the mobile breakpoint the section stacks
/// vertically and the thumbnails span the row.
///
/// When this job holds the expanded selection, the inline large view is
/// appended under the section.

use crate::state::data::JobEntry;
use crate::state::theme::ThemePreference;
use crate::state::viewer::ViewerState;
use crate::ui::viewer;
use crate::{image_or_placeholder, ImageCache, ImageKey, Message};
use iced::widget::{column, container, image, mouse_area, row, text, Space};
use iced::{Alignment, Border, ContentFit, Element, Length};

const ICON_SIZE_DESKTOP: f32 = 80.0;
const ICON_SIZE_MOBILE: f32 = 56.0;
const THUMB_SIZE_DESKTOP: f32 = 80.0;
const THUMB_SIZE_MOBILE: f32 = 64.0;

pub fn view<'a>(
    job: &'a JobEntry,
    state: &ViewerState,
    images: &ImageCache,
    prefs: ThemePreference,
    mobile: bool,
) -> Element<'a, Message> {
    let selected_image = state
        .selection()
        .filter(|s| s.job == job.index)
        .map(|s| s.image);

    let icon_size = if mobile { ICON_SIZE_MOBILE } else { ICON_SIZE_DESKTOP };
    let icon = icon_view(job, images, prefs, icon_size);

    let title = text(&job.title).size(if mobile { 18 } else { 26 });
    let date = text(&job.date).size(14).color(prefs.muted_text());
    let description = text(&job.description)
        .size(if mobile { 13 } else { 15 })
        .color(prefs.muted_text());

    let thumbs = thumbnail_strip(job, selected_image, images, prefs, mobile);

    let section: Element<Message> = if mobile {
        column![
            row![icon, column![title, date].spacing(2)]
                .spacing(14)
                .align_y(Alignment::Center),
            description,
            thumbs,
        ]
        .spacing(12)
        .into()
    } else {
        row![
            icon,
            column![title, date, description].spacing(4).max_width(440),
            Space::with_width(Length::Fill),
            thumbs,
        ]
        .spacing(20)
        .align_y(Alignment::Center)
        .into()
    };

    // Inline expanded view shows under its own job section only
    match (*state, selected_image) {
        (ViewerState::Expanded(_), Some(image_index)) => column![
            section,
            viewer::expanded(job, image_index, images, prefs)
        ]
        .spacing(16)
        .into(),
        _ => section,
    }
}

/// The round company icon, or an accent-tinted disc while it loads.
fn icon_view(
    job: &JobEntry,
    images: &ImageCache,
    prefs: ThemePreference,
    size: f32,
) -> Element<'static, Message> {
    let accent = prefs.color.accent();
    let content: Element<Message> = match images.get(&ImageKey::icon(job.index)) {
        Some(handle) => image(handle.clone())
            .width(size)
            .height(size)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Space::new(size, size).into(),
    };

    container(content)
        .width(size)
        .height(size)
        .clip(true)
        .style(move |_| container::Style {
            background: Some(crate::color::with_alpha(accent, 0.15).into()),
            border: Border {
                color: accent,
                width: 3.0,
                radius: (size / 2.0).into(),
            },
            ..Default::default()
        })
        .into()
}

/// The clickable thumbnail strip.
fn thumbnail_strip(
    job: &JobEntry,
    selected_image: Option<usize>,
    images: &ImageCache,
    prefs: ThemePreference,
    mobile: bool,
) -> Element<'static, Message> {
    let size = if mobile { THUMB_SIZE_MOBILE } else { THUMB_SIZE_DESKTOP };
    let mut strip = row![].spacing(12);

    for i in 0..job.display_images().len() {
        let handle = image_or_placeholder(images, ImageKey::photo(job.index, i));
        let selected = selected_image == Some(i);
        let accent = prefs.color.accent();

        let thumb = container(
            image(handle)
                .width(size)
                .height(size)
                .content_fit(ContentFit::Cover),
        )
        .width(size)
        .height(size)
        .clip(true)
        .style(move |_| container::Style {
            border: Border {
                color: if selected {
                    accent
                } else {
                    crate::color::with_alpha(accent, 0.35)
                },
                width: 2.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

        strip = strip.push(
            mouse_area(thumb).on_press(Message::ThumbnailClicked {
                job: job.index,
                image: i,
            }),
        );
    }

    strip.into()
}
