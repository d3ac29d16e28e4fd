use iced::widget::{column, container, image, scrollable, text, Column, Row};
use iced::{Element, Fill, Padding};

use crate::app::{MealCard, Message};
use crate::ui::theme;

/// Cards per grid row
const COLUMNS: usize = 3;

/// Build the result grid: a count header above rows of meal cards.
pub fn view<'a>(cards: &'a [MealCard]) -> Element<'a, Message> {
    if cards.is_empty() {
        return column![].into();
    }

    let header = text(format!("Found {} meal(s)", cards.len()))
        .size(20)
        .style(theme::count_header);

    let rows: Vec<Element<'a, Message>> = cards
        .chunks(COLUMNS)
        .map(|chunk| {
            let mut cells: Vec<Element<'a, Message>> =
                chunk.iter().map(card_view).collect();
            // Pad the last row so every card keeps the same width
            while cells.len() < COLUMNS {
                cells.push(container(column![]).width(Fill).into());
            }
            Row::from_vec(cells).spacing(12).into()
        })
        .collect();

    let grid = Column::from_vec(rows).spacing(12);

    column![header, scrollable(grid).height(Fill)]
        .spacing(12)
        .into()
}

fn card_view<'a>(card: &'a MealCard) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match &card.thumbnail {
        Some(handle) => image(handle.clone()).width(Fill).height(140).into(),
        None => container(text("🍽").size(40))
            .width(Fill)
            .height(140)
            .align_x(iced::Center)
            .align_y(iced::Center)
            .style(theme::thumbnail_placeholder)
            .into(),
    };

    let name = text(&card.meal.name).size(16).style(theme::result_name);
    let ingredients = text(format!("Ingredients: {}", card.meal.ingredient_count))
        .size(12)
        .style(theme::result_subtitle);

    container(column![thumbnail, name, ingredients].spacing(6))
        .padding(Padding::new(10.0))
        .width(Fill)
        .style(theme::meal_card)
        .into()
}
