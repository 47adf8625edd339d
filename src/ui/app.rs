use crate::api::{AnimalImage, AnimalType};
use crate::config::GalleryConfig;
use crate::gallery::{
    find_breed, FetchCommand, FetchEvent, GalleryIntent, GalleryReducer, GalleryState,
};
use crate::lazy::{LazyImage, Thumbnail, ViewportObserver};
use crate::ui::grid::{GridLayout, ScrollState};
use crate::ui::mvi::Reducer;
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Which control receives key presses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    AnimalType,
    Breed,
    Search,
    Grid,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::AnimalType, Focus::Breed, Focus::Search, Focus::Grid];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub type CommandSender = mpsc::Sender<FetchCommand>;

/// A mounted card: the image record plus its lazy loader.
#[derive(Debug)]
pub struct GalleryCard {
    pub image: AnimalImage,
    pub lazy: LazyImage,
}

/// Result of a thumbnail fetch for a loaded card.
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbnailSlot {
    Ready(Thumbnail),
    Failed(String),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Gallery data and query state (MVI pattern).
    gallery: GalleryState,
    /// One card per entry of `gallery.images`, same order.
    cards: Vec<GalleryCard>,
    observer: ViewportObserver,
    grid: GridLayout,
    scroll: ScrollState,
    thumbnails: HashMap<String, ThumbnailSlot>,
    card_width: u16,
    card_height: u16,
    spinner_tick: u8,
    command_sender: Option<CommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(config: &GalleryConfig, animal: AnimalType) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Grid,
            gallery: GalleryState::new(animal),
            cards: Vec::new(),
            observer: ViewportObserver::new(config.lazy_margin_rows),
            grid: GridLayout::new(0, config.card_width, config.card_height),
            scroll: ScrollState::default(),
            thumbnails: HashMap::new(),
            card_width: config.card_width,
            card_height: config.card_height,
            spinner_tick: 0,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: CommandSender) {
        self.command_sender = Some(sender);
    }

    /// Initial load for the current animal type.
    pub fn start(&mut self) {
        self.request_breeds();
        self.request_images(None);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn cards(&self) -> &[GalleryCard] {
        &self.cards
    }

    pub fn grid(&self) -> GridLayout {
        self.grid
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn observer(&self) -> &ViewportObserver {
        &self.observer
    }

    pub fn thumbnail(&self, image_id: &str) -> Option<&ThumbnailSlot> {
        self.thumbnails.get(image_id)
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn on_tick(&mut self) {
        if self.gallery.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Grid area changed size.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.grid = GridLayout::new(width, self.card_width, self.card_height);
        self.scroll.set_height(height);
        for (index, card) in self.cards.iter().enumerate() {
            card.lazy.relayout(self.grid.card_span(index));
        }
        self.scroll.clamp(self.total_rows());
        self.update_visibility();
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll.scroll_by(delta, self.total_rows());
        self.update_visibility();
    }

    pub fn scroll_page(&mut self, pages: i32) {
        let page = i32::from(self.scroll.height().max(1));
        self.scroll_by(pages * page);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to_top();
        self.update_visibility();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.scroll_to_bottom(self.total_rows());
        self.update_visibility();
    }

    // ========================================================================
    // Gallery operations
    // ========================================================================

    /// Switch animal type. Clears breed/search selection and refetches both
    /// data sets. Selecting the current type does nothing.
    pub fn select_animal_type(&mut self, animal: AnimalType) -> bool {
        if animal == self.gallery.animal_type {
            return false;
        }
        tracing::info!(animal = %animal, "Animal type selected");
        self.dispatch(GalleryIntent::SelectAnimalType(animal));
        self.scroll.scroll_to_top();
        self.start();
        true
    }

    pub fn toggle_animal_type(&mut self) {
        let next = self.gallery.animal_type.toggled();
        self.select_animal_type(next);
    }

    /// Select a breed filter (`None` = all breeds) and refetch images.
    pub fn select_breed(&mut self, breed_id: Option<String>) {
        tracing::debug!(breed = ?breed_id, "Breed selected");
        self.dispatch(GalleryIntent::SelectBreed(breed_id.clone()));
        self.scroll.scroll_to_top();
        self.request_images(breed_id);
    }

    /// Step through `All Breeds` followed by the breed list, wrapping.
    pub fn move_breed_selection(&mut self, direction: i32) {
        let options = self.gallery.breeds.len() + 1;
        let current = self
            .gallery
            .selected_breed_index()
            .map(|index| index + 1)
            .unwrap_or(0);
        let next = if direction.is_negative() {
            (current + options - 1) % options
        } else {
            (current + 1) % options
        };
        let breed_id = match next {
            0 => None,
            n => self.gallery.breeds.get(n - 1).map(|breed| breed.id.clone()),
        };
        self.select_breed(breed_id);
    }

    pub fn set_search_term(&mut self, term: String) {
        self.dispatch(GalleryIntent::SetSearchTerm(term));
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut term = self.gallery.search_term().to_string();
        term.push(ch);
        self.set_search_term(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.gallery.search_term().to_string();
        if term.pop().is_some() {
            self.set_search_term(term);
        }
    }

    /// Find the first breed whose name contains the search term and select it.
    pub fn submit_search(&mut self) {
        let outcome = find_breed(self.gallery.search_term(), &self.gallery.breeds)
            .map(|breed| breed.id.clone());
        match outcome {
            Ok(breed_id) => self.select_breed(Some(breed_id)),
            Err(err) => {
                tracing::debug!(term = self.gallery.search_term(), "Breed search missed");
                self.dispatch(GalleryIntent::SearchMissed {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Apply an outcome produced by the fetch worker.
    pub fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Gallery(intent) => self.dispatch(intent),
            FetchEvent::Thumbnail { image_id, result } => {
                if !self.cards.iter().any(|card| card.image.id == image_id) {
                    return;
                }
                let slot = match result {
                    Ok(thumbnail) => ThumbnailSlot::Ready(thumbnail),
                    Err(message) => ThumbnailSlot::Failed(message),
                };
                self.thumbnails.insert(image_id, slot);
            }
        }
    }

    /// Dispatch an intent to the gallery reducer and remount cards if the
    /// image set changed.
    pub fn dispatch(&mut self, intent: GalleryIntent) {
        dispatch_mvi!(self, gallery, GalleryReducer, intent);
        let unchanged = self.cards.len() == self.gallery.images.len()
            && self
                .cards
                .iter()
                .zip(&self.gallery.images)
                .all(|(card, image)| card.image == *image);
        if !unchanged {
            self.reconcile_cards();
        }
    }

    fn request_breeds(&mut self) {
        let animal = self.gallery.animal_type;
        self.dispatch(GalleryIntent::BreedsRequested);
        if !self.send_command(FetchCommand::LoadBreeds { animal }) {
            self.dispatch(GalleryIntent::LoadFinished);
        }
    }

    fn request_images(&mut self, breed_id: Option<String>) {
        let animal = self.gallery.animal_type;
        self.dispatch(GalleryIntent::ImagesRequested);
        if !self.send_command(FetchCommand::LoadImages { animal, breed_id }) {
            self.dispatch(GalleryIntent::LoadFinished);
        }
    }

    /// Keep cards whose image id survived (their lazy state too), mount new
    /// ones, and drop the rest, which detaches them from the observer.
    fn reconcile_cards(&mut self) {
        let mut existing: HashMap<String, GalleryCard> = self
            .cards
            .drain(..)
            .map(|card| (card.image.id.clone(), card))
            .collect();

        let mut cards = Vec::with_capacity(self.gallery.images.len());
        for (index, image) in self.gallery.images.iter().enumerate() {
            let span = self.grid.card_span(index);
            let card = match existing.remove(&image.id) {
                Some(mut card) => {
                    card.image = image.clone();
                    card.lazy.relayout(span);
                    card
                }
                None => GalleryCard {
                    image: image.clone(),
                    lazy: LazyImage::mount(&self.observer, image.url.clone(), span),
                },
            };
            cards.push(card);
        }
        drop(existing);
        self.cards = cards;

        let cards = &self.cards;
        self.thumbnails
            .retain(|id, _| cards.iter().any(|card| card.image.id == *id));
        self.scroll.clamp(self.total_rows());
        self.update_visibility();
    }

    /// Fire lazy images that came within the trigger margin.
    fn update_visibility(&mut self) {
        let fired = self.observer.check(self.scroll.viewport());
        if fired.is_empty() {
            return;
        }

        let size = self.grid.image_size();
        let mut commands = Vec::new();
        for card in &mut self.cards {
            let Some(target) = card.lazy.target() else {
                continue;
            };
            if fired.contains(&target) && card.lazy.on_intersect() {
                let image_id = card.image.id.clone();
                let command = FetchCommand::LoadThumbnail {
                    image_id: image_id.clone(),
                    url: card.lazy.source().to_string(),
                    size,
                };
                commands.push((image_id, command));
            }
        }

        tracing::trace!(count = commands.len(), "Lazy images triggered");
        let headless = self.command_sender.is_none();
        for (image_id, command) in commands {
            // A fired trigger never re-arms, so a dropped request is final.
            if !self.send_command(command) && !headless {
                self.thumbnails.insert(
                    image_id,
                    ThumbnailSlot::Failed("Fetch queue unavailable".to_string()),
                );
            }
        }
    }

    fn total_rows(&self) -> u32 {
        self.grid.total_rows(self.cards.len())
    }

    fn send_command(&mut self, command: FetchCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!("Fetch command dropped: {}", err);
                self.last_command_error = Some(format!("Fetch queue unavailable: {}", err));
                false
            }
        }
    }
}
