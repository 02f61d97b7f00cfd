/// Position within a fixed photo set. Both directions wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_photo(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev_photo(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// "3 of 5"
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            return "0 of 0".into();
        }
        format!("{} of {}", self.index + 1, self.len)
    }
}

/// Like counter text under the announcement post.
pub fn likes_label(liked: bool) -> &'static str {
    if liked {
        "1 like"
    } else {
        "Be the first to like this"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        let mut c = Carousel::new(5);
        for _ in 0..4 {
            c.next_photo();
        }
        assert_eq!(c.index(), 4);
        c.next_photo();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut c = Carousel::new(5);
        c.prev_photo();
        assert_eq!(c.index(), 4);
        assert_eq!(c.position_label(), "5 of 5");
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        c.next_photo();
        c.prev_photo();
        assert_eq!(c.index(), 0);
        assert_eq!(c.position_label(), "0 of 0");
    }

    #[test]
    fn like_label() {
        assert_eq!(likes_label(true), "1 like");
        assert_eq!(likes_label(false), "Be the first to like this");
    }
}
