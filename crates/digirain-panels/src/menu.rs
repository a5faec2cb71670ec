//! Menu selection state.

/// A horizontal menu with a wrapping cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    items: Vec<String>,
    selected: usize,
}

impl Menu {
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            selected: 0,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    /// Move the cursor right, wrapping at the end.
    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    /// Move the cursor left, wrapping at the start.
    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    /// Put the cursor on `index` and return its item, if it exists.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.items.len() {
            return None;
        }
        self.selected = index;
        self.selected_item()
    }

    /// Put the cursor on the item equal to `key`, ignoring ASCII case.
    pub fn select_key(&mut self, key: &str) -> Option<&str> {
        let index = self.items.iter().position(|i| i.eq_ignore_ascii_case(key))?;
        self.select(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut menu = Menu::new(["enter", "about", "contact"]);
        assert_eq!(menu.selected_item(), Some("enter"));
        menu.previous();
        assert_eq!(menu.selected_item(), Some("contact"));
        menu.next();
        menu.next();
        assert_eq!(menu.selected_item(), Some("about"));
    }

    #[test]
    fn test_select_bounds() {
        let mut menu = Menu::new(["enter", "about"]);
        assert_eq!(menu.select(1), Some("about"));
        assert_eq!(menu.select(5), None);
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_select_key() {
        let mut menu = Menu::new(["enter", "about"]);
        assert_eq!(menu.select_key("ABOUT"), Some("about"));
        assert_eq!(menu.select_key("nope"), None);
    }

    #[test]
    fn test_empty_menu() {
        let mut menu = Menu::new(Vec::<String>::new());
        menu.next();
        menu.previous();
        assert_eq!(menu.selected_item(), None);
    }
}
