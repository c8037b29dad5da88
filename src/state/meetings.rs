/// One checkbox on the meeting action list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Free-form meeting notes next to an action list.
#[derive(Clone, Debug, PartialEq)]
pub struct MeetingBoard {
    pub notes: String,
    items: Vec<ActionItem>,
    next_id: u64,
}

impl Default for MeetingBoard {
    fn default() -> Self {
        let mut board = Self {
            notes: String::new(),
            items: Vec::new(),
            next_id: 1,
        };
        board.add_item("Review latest system architecture");
        if let Some(id) = board.add_item("Update notion dashboard plan") {
            board.toggle(id);
        }
        board
    }
}

impl MeetingBoard {
    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    /// Append a task. Blank text is ignored.
    pub fn add_item(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ActionItem {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    pub fn toggle(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Start a fresh page of notes. Action items carry over.
    pub fn new_note(&mut self) {
        self.notes.clear();
    }

    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}
