use crate::notify::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub front: String,
    pub back: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Hard = 1,
    Normal = 2,
    Easy = 3,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Hard),
            2 => Some(Difficulty::Normal),
            3 => Some(Difficulty::Easy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Hard => "Hard",
            Difficulty::Normal => "Normal",
            Difficulty::Easy => "Easy",
        }
    }
}

/// Linear cursor over the deck. Only the card under the cursor is visible;
/// whether a card is flipped is tracked separately per card.
#[derive(Debug, Clone)]
pub struct FlashcardNavigator {
    cards: Vec<CardView>,
    cursor: usize,
    revealed: Vec<bool>,
}

impl FlashcardNavigator {
    pub fn new(cards: Vec<CardView>) -> Self {
        let revealed = vec![false; cards.len()];
        Self {
            cards,
            cursor: 0,
            revealed,
        }
    }

    pub fn flip(&mut self, index: usize) {
        if let Some(flag) = self.revealed.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn next(&mut self) {
        if self.cursor < self.cards.len().saturating_sub(1) {
            self.revealed[self.cursor] = false;
            self.cursor += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.cursor > 0 {
            self.revealed[self.cursor] = false;
            self.cursor -= 1;
        }
    }

    /// Acknowledges a difficulty rating. Ratings are not stored and do not
    /// change the order of the deck.
    pub fn rate(&self, index: usize, difficulty: Difficulty) -> Notification {
        crate::logger::log(&format!(
            "Card {} rated {}",
            index + 1,
            difficulty.label()
        ));
        Notification::success(format!("Card marked as \"{}\"", difficulty.label()))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index == self.cursor && index < self.cards.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// The one card on screen.
    pub fn current(&self) -> Option<&CardView> {
        self.cards
            .get(self.cursor)
            .filter(|_| self.is_visible(self.cursor))
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.cursor + 1, self.len())
    }
}
