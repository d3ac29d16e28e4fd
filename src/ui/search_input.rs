use iced::widget::{button, row, text, text_input};
use iced::{Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "mealdeck-search-input";

/// Build the search form: text input plus submit button. Pressing Enter in
/// the input and clicking the button submit the same message.
pub fn view(query: &str) -> Element<'_, Message> {
    let input = text_input("Search for a meal (e.g., Arrabiata)...", query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SearchRequested)
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(18)
        .width(Fill)
        .style(theme::search_input);

    let submit = button(text("Search").size(16))
        .on_press(Message::SearchRequested)
        .padding([12, 20])
        .style(theme::search_button);

    row![input, submit].spacing(8).into()
}
