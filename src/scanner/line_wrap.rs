// WHY: Column tracking for output wrapping, driven by consumed input rather than emitted text

/// Column limit used when none is configured
pub const DEFAULT_WRAP_COLUMN: usize = 90;

/// Counts consumed input characters and signals when a line break is due
///
/// Every consumed character advances the counter, including characters that
/// produced no output. Break positions are therefore only an approximation of
/// the visible line length.
#[derive(Debug, Clone)]
pub struct LineWrapper {
    limit: usize,
    column: usize,
}

impl LineWrapper {
    pub fn new(limit: usize) -> Self {
        Self { limit, column: 0 }
    }

    /// Account for one consumed character; returns true when a break must be inserted.
    /// The counter is already reset when this returns true.
    pub fn advance(&mut self) -> bool {
        self.column += 1;
        if self.column > self.limit {
            self.column = 0;
            true
        } else {
            false
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for LineWrapper {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_COLUMN)
    }
}

/// Rewrap already-finished text, breaking after the first space, `?` or `!`
/// once more than `limit` characters have been copied since the last break
pub fn rewrap_at_boundaries(text: &str, limit: usize) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / limit.max(1));
    let mut column = 0usize;

    for ch in text.chars() {
        column += 1;
        result.push(ch);
        if column > limit && matches!(ch, ' ' | '?' | '!') {
            result.push('\n');
            column = 0;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_after_limit_exceeded() {
        let mut wrapper = LineWrapper::new(3);
        assert!(!wrapper.advance());
        assert!(!wrapper.advance());
        assert!(!wrapper.advance());
        assert_eq!(wrapper.column(), 3);
        assert!(wrapper.advance());
        assert_eq!(wrapper.column(), 0);
        assert!(!wrapper.advance());
        assert_eq!(wrapper.column(), 1);
    }

    #[test]
    fn test_default_limit() {
        let mut wrapper = LineWrapper::default();
        assert_eq!(wrapper.limit(), 90);
        let breaks = (0..91).filter(|_| wrapper.advance()).count();
        assert_eq!(breaks, 1);
        assert_eq!(wrapper.column(), 0);
    }

    #[test]
    fn test_breaks_every_limit_plus_one() {
        let mut wrapper = LineWrapper::new(90);
        let positions: Vec<usize> = (1..=400).filter(|_| wrapper.advance()).collect();
        assert_eq!(positions, vec![91, 182, 273, 364]);
    }

    #[test]
    fn test_rewrap_waits_for_boundary() {
        let text = "abcdef ghi";
        assert_eq!(rewrap_at_boundaries(text, 3), "abcdef \nghi");
    }

    #[test]
    fn test_rewrap_short_text_untouched() {
        assert_eq!(rewrap_at_boundaries("Hola mundo!", 90), "Hola mundo!");
        assert_eq!(rewrap_at_boundaries("", 90), "");
    }

    #[test]
    fn test_rewrap_question_and_exclamation() {
        assert_eq!(rewrap_at_boundaries("aaaa?bb!cc", 2), "aaaa?\nbb!\ncc");
    }
}
