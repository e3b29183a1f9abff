//! Tests for the progress module functionality.
//!
//! This file contains tests for tracker counting and bar line rendering.

use multibar::progress::{percent, render_bar, BarLayout, ProgressTracker, CHAR_FILLED};
use multibar::utils::display_width;
use std::thread;

mod common;
use common::helpers::*;

#[test]
fn test_tracker_new() {
    let tracker = ProgressTracker::new(100, "song.flac", 3);
    assert_eq!(tracker.total(), 100);
    assert_eq!(tracker.current(), 0);
    assert_eq!(tracker.name(), "song.flac");
    assert_eq!(tracker.order(), 3);
    assert!(!tracker.is_complete());
}

#[test]
fn test_tracker_add_accumulates() {
    let tracker = ProgressTracker::new(100, "a", 0);
    tracker.add(10);
    tracker.add(0);
    tracker.add(15);
    assert_eq!(tracker.current(), 25);
}

#[test]
fn test_tracker_is_not_clamped() {
    let tracker = create_tracker(10, 25, "over.bin", 0);
    assert_eq!(tracker.current(), 25);
    assert_eq!(tracker.percent(), 250.0);
    assert!(tracker.is_complete());
}

#[test]
fn test_tracker_concurrent_adds_sum_exactly() {
    let tracker = create_tracker(0, 7, "shared", 0);
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            let tracker = tracker.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    tracker.add(i + 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    // 1000 * (1 + 2 + ... + 8)
    assert_eq!(tracker.current(), 7 + 36_000);
}

#[test]
fn test_tracker_clone_identity() {
    let tracker = ProgressTracker::new(1, "a", 0);
    let same = tracker.clone();
    let twin = ProgressTracker::new(1, "a", 0);
    assert!(tracker.ptr_eq(&same));
    assert!(!tracker.ptr_eq(&twin));
}

#[test]
fn test_render_half_way() {
    let tracker = create_tracker(100, 50, "a.txt", 0);
    let line = tracker.render(TEST_WIDTH);
    assert!(line.ends_with(" 50%"));
    assert_eq!(line, expected_line("a.txt", 18, '>', " 50"));
}

#[test]
fn test_render_odd_position_flips_mouth() {
    let tracker = create_tracker(4, 1, "b.txt", 0);
    assert_eq!(tracker.render(TEST_WIDTH), expected_line("b.txt", 9, '<', " 25"));
}

#[test]
fn test_render_start() {
    let tracker = ProgressTracker::new(1000, "start", 0);
    assert_eq!(tracker.render(TEST_WIDTH), expected_line("start", 0, '>', "  0"));
}

#[test]
fn test_render_complete() {
    let tracker = create_tracker(20, 20, "b.txt", 1);
    let line = tracker.render(TEST_WIDTH);
    assert_eq!(line, expected_line("b.txt", 35, CHAR_FILLED, "100"));
    assert!(line.ends_with("100%"));
}

#[test]
fn test_render_overshoot_keeps_bar_width() {
    let tracker = create_tracker(10, 20, "over", 0);
    let line = tracker.render(TEST_WIDTH);
    assert_eq!(line, expected_line("over", 35, CHAR_FILLED, "200"));
}

#[test]
fn test_render_unknown_total_is_zero_percent() {
    let tracker = create_tracker(0, 12345, "stream", 0);
    let line = tracker.render(TEST_WIDTH);
    assert!(line.ends_with("  0%"));
    assert_eq!(percent(12345, 0), 0.0);
}

#[test]
fn test_render_rounds_percentage() {
    assert!(create_tracker(3, 1, "x", 0).render(TEST_WIDTH).ends_with(" 33%"));
    assert!(create_tracker(3, 2, "x", 0).render(TEST_WIDTH).ends_with(" 67%"));
}

#[test]
fn test_render_line_fills_terminal_minus_one() {
    let tracker = create_tracker(100, 30, "a.txt", 0);
    for width in [60, 80, 120, 200] {
        let line = tracker.render(width);
        assert_eq!(display_width(&line.replace(|c: char| c == '▇' || c == '·', "x")), width - 1);
    }
}

#[test]
fn test_render_narrow_terminal_keeps_min_bar() {
    let tracker = create_tracker(100, 50, "a.txt", 0);
    let line = tracker.render(20);
    let bar: String = line
        .chars()
        .skip_while(|c| *c != '[')
        .skip(1)
        .take_while(|c| *c != ']')
        .collect();
    assert_eq!(bar.chars().count(), BarLayout::MIN_BAR_WIDTH);
    assert!(bar.starts_with("▇▇▇▇▇>"));
}

#[test]
fn test_render_zero_width_does_not_underflow() {
    let tracker = create_tracker(100, 100, "a.txt", 0);
    let line = tracker.render(0);
    assert!(line.ends_with("100%"));
}

#[test]
fn test_render_pads_short_names() {
    let line = ProgressTracker::new(1, "ab", 0).render(TEST_WIDTH);
    assert!(line.starts_with(&format!("ab{} [", " ".repeat(33))));
}

#[test]
fn test_render_truncates_long_names() {
    let name = "x".repeat(50);
    let line = ProgressTracker::new(1, name, 0).render(TEST_WIDTH);
    assert!(line.starts_with(&format!("{}.. [", "x".repeat(33))));
}

#[test]
fn test_render_wide_names_align() {
    let name = "晴天".repeat(10);
    let line = ProgressTracker::new(1, name, 0).render(TEST_WIDTH);
    let column: String = line.chars().take_while(|c| *c != '[').collect();
    // 16 wide chars, "..", one pad, then the separator space
    assert_eq!(column, format!("{}.. ", "晴天".repeat(8)) + " ");
    assert_eq!(display_width(&column), 35 + 1);
}

#[test]
fn test_render_with_custom_layout() {
    let layout = BarLayout::new(10, 4);
    let line = render_bar("abc", 1, 2, 30, &layout);
    // 30 - (10 + 8) - 1 = 11 cells of bar
    assert_eq!(line, format!("abc{} [▇▇▇▇▇<·····]  50%", " ".repeat(7)));
    assert_eq!(layout.bar_width(30), 11);
    assert_eq!(layout.bar_width(5), 4);
}
