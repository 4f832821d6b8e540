/// Multi-column image grid
///
/// Turns one page of image paths into a row of equally wide columns,
/// filled round-robin so images flow left to right, row by row. The
/// column choice comes from `state::layout`; this module only builds
/// the widgets.
use iced::widget::{image, Column, Row};
use iced::{Element, Length};
use std::path::PathBuf;

use crate::state::layout::assign_columns;

/// Spacing between grid cells, in pixels
const GRID_SPACING: u16 = 10;

/// Build the image grid for one page.
pub fn image_grid<'a, Message: 'a>(
    images: &'a [PathBuf],
    nb_columns: usize,
) -> Element<'a, Message> {
    let mut buckets: Vec<Vec<Element<'a, Message>>> =
        (0..nb_columns).map(|_| Vec::new()).collect();

    for (col, path) in assign_columns(images, nb_columns) {
        let widget = image(image::Handle::from_path(path)).width(Length::Fill);
        buckets[col].push(widget.into());
    }

    Row::with_children(buckets.into_iter().map(|cells| {
        Column::with_children(cells)
            .spacing(GRID_SPACING)
            .width(Length::Fill)
            .into()
    }))
    .spacing(GRID_SPACING)
    .width(Length::Fill)
    .into()
}
