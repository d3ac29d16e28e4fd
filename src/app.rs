use iced::widget::{column, container, image, text};
use iced::{Element, Fill, Padding, Task, Theme};

use crate::api::client::MealClient;
use crate::api::{Meal, SearchFailure};
use crate::config::Config;
use crate::ui::{meal_grid, search_input, theme};

pub struct State {
    client: MealClient,
    query: String,
    search: SearchState,
    /// Sequence number of the most recently issued search. Settlements
    /// carrying an older number are stale and discarded, so a rapid second
    /// submit can never be overwritten by the first one's late response.
    seq: u64,
}

/// The whole search flow as one tagged state; the view is a total function
/// over this, so loading, error, and results can never show at once.
#[derive(Debug, Clone)]
pub enum SearchState {
    Idle,
    Loading,
    Loaded(Vec<MealCard>),
    Failed(SearchFailure),
}

/// A meal plus its lazily fetched thumbnail.
#[derive(Debug, Clone)]
pub struct MealCard {
    pub meal: Meal,
    pub thumbnail: Option<image::Handle>,
}

impl MealCard {
    fn new(meal: Meal) -> Self {
        Self {
            meal,
            thumbnail: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SearchRequested,
    SearchCompleted {
        seq: u64,
        outcome: Result<Vec<Meal>, SearchFailure>,
    },
    ThumbnailLoaded {
        seq: u64,
        index: usize,
        handle: Option<image::Handle>,
    },
}

impl State {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let state = Self {
            client: MealClient::new(&config.api.base_url),
            query: String::new(),
            search: SearchState::Idle,
            seq: 0,
        };

        let focus = iced::widget::operation::focus(search_input::SEARCH_INPUT_ID);
        (state, focus)
    }

    pub fn title(&self) -> String {
        String::from("Mealdeck")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
            Message::SearchRequested => {
                let query = self.query.trim().to_string();
                if query.is_empty() {
                    return Task::none();
                }

                self.seq += 1;
                let seq = self.seq;
                self.search = SearchState::Loading;

                let client = self.client.clone();
                Task::perform(
                    async move {
                        client.search(&query).await.map_err(|err| {
                            tracing::warn!("Search failed: {}", err);
                            err.failure()
                        })
                    },
                    move |outcome| Message::SearchCompleted { seq, outcome },
                )
            }
            Message::SearchCompleted { seq, outcome } => {
                if seq != self.seq {
                    tracing::debug!("Discarding stale search settlement (seq {})", seq);
                    return Task::none();
                }
                match outcome {
                    Ok(meals) => {
                        let fetches = meals
                            .iter()
                            .enumerate()
                            .map(|(index, meal)| self.fetch_thumbnail(seq, index, &meal.image))
                            .collect::<Vec<_>>();

                        self.search =
                            SearchState::Loaded(meals.into_iter().map(MealCard::new).collect());
                        Task::batch(fetches)
                    }
                    Err(failure) => {
                        self.search = SearchState::Failed(failure);
                        Task::none()
                    }
                }
            }
            Message::ThumbnailLoaded { seq, index, handle } => {
                if seq == self.seq {
                    if let SearchState::Loaded(cards) = &mut self.search {
                        if let Some(card) = cards.get_mut(index) {
                            card.thumbnail = handle;
                        }
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Mealdeck").size(28).style(theme::header_title),
            text("Find meals with the least ingredients!")
                .size(14)
                .style(theme::header_tagline),
        ]
        .spacing(4);

        let input = search_input::view(&self.query);

        let content: Element<'_, Message> = match &self.search {
            SearchState::Idle => column![].into(),
            SearchState::Loading => text("Loading meals...")
                .size(16)
                .style(theme::loading_text)
                .into(),
            SearchState::Failed(failure) => text(failure.user_message())
                .size(16)
                .style(theme::error_text)
                .into(),
            SearchState::Loaded(cards) => meal_grid::view(cards),
        };

        let layout = column![header, input, content]
            .spacing(16)
            .padding(Padding::new(20.0));

        container(layout)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn fetch_thumbnail(&self, seq: u64, index: usize, url: &str) -> Task<Message> {
        let client = self.client.clone();
        let url = url.to_string();
        Task::perform(
            async move {
                match client.fetch_image(&url).await {
                    Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
                    Err(err) => {
                        tracing::warn!("Failed to load thumbnail {}: {}", url, err);
                        None
                    }
                }
            },
            move |handle| Message::ThumbnailLoaded { seq, index, handle },
        )
    }
}
