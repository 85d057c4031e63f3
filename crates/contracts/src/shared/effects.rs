//! Arithmetic behind the cosmetic scroll and hover effects.

/// Values shown by a count-up animation, one per tick.
///
/// Tick `n` of `steps` displays the floor of `target * n / steps`; the last
/// value is always exactly `target`.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u32,
    steps: u32,
    tick: u32,
}

impl CountUp {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            tick: 0,
        }
    }
}

impl Iterator for CountUp {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.tick >= self.steps {
            return None;
        }
        self.tick += 1;
        let current = f64::from(self.target) * f64::from(self.tick) / f64::from(self.steps);
        if current >= f64::from(self.target) {
            self.tick = self.steps;
            return Some(self.target);
        }
        Some(current.floor() as u32)
    }
}

/// Leading integer of a `data-count` value, so `"150+"` reads as 150.
pub fn parse_count(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

pub const TILT_REST: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";

/// Transform for a card tilted toward the pointer at (`x`, `y`), relative to
/// the card's top-left corner.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let rotate_x = (y - height / 2.0) / 10.0;
    let rotate_y = (width / 2.0 - x) / 10.0;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.05, 1.05, 1.05)",
        rotate_x, rotate_y
    )
}

/// Entrance animation delay of the `index`-th child of a grid.
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(100)
}

/// True once the page is scrolled strictly past `threshold` pixels.
pub fn past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_up_ends_on_target() {
        let frames: Vec<u32> = CountUp::new(120, 50).collect();
        assert_eq!(frames.len(), 50);
        assert_eq!(frames[0], 2);
        assert_eq!(*frames.last().unwrap(), 120);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_count_up_small_target() {
        let frames: Vec<u32> = CountUp::new(3, 50).collect();
        assert_eq!(frames.first(), Some(&0));
        assert_eq!(frames.last(), Some(&3));
    }

    #[test]
    fn test_count_up_zero() {
        assert_eq!(CountUp::new(0, 50).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("150"), Some(150));
        assert_eq!(parse_count(" 98%"), Some(98));
        assert_eq!(parse_count("n/a"), None);
    }

    #[test]
    fn test_tilt_transform() {
        assert_eq!(
            tilt_transform(50.0, 50.0, 100.0, 100.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1.05, 1.05, 1.05)"
        );
        assert_eq!(
            tilt_transform(0.0, 100.0, 100.0, 100.0),
            "perspective(1000px) rotateX(5deg) rotateY(5deg) scale3d(1.05, 1.05, 1.05)"
        );
    }

    #[test]
    fn test_stagger_and_thresholds() {
        assert_eq!(stagger_delay_ms(3), 300);
        assert!(!past_threshold(10.0, 10.0));
        assert!(past_threshold(10.5, 10.0));
    }
}
