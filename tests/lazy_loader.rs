//! Lazy image lifecycle against a shared viewport observer.

use pet_gallery::lazy::{LazyImage, LazyImageState, Span, ViewportObserver};

#[test]
fn placeholder_until_first_intersection() {
    let observer = ViewportObserver::new(4);
    let mut image = LazyImage::mount(&observer, "https://cdn/a.jpg", Span::new(100, 12));

    assert!(observer.check(Span::new(0, 24)).is_empty());
    assert_eq!(image.state(), LazyImageState::Pending);

    // scrolled so the card sits within the 4-row margin below the viewport
    let fired = observer.check(Span::new(73, 24));
    assert_eq!(fired, vec![image.target().unwrap()]);
    assert!(image.on_intersect());
    assert_eq!(image.state(), LazyImageState::Loaded);
}

#[test]
fn loads_exactly_once() {
    let observer = ViewportObserver::new(0);
    let mut image = LazyImage::mount(&observer, "u", Span::new(0, 12));

    assert_eq!(observer.check(Span::new(0, 24)).len(), 1);
    assert!(image.on_intersect());
    // scrolling away and back never re-fires
    assert!(observer.check(Span::new(200, 24)).is_empty());
    assert!(observer.check(Span::new(0, 24)).is_empty());
    assert!(!image.on_intersect());
    assert!(image.is_loaded());
}

#[test]
fn unmount_before_trigger_has_no_effect() {
    let observer = ViewportObserver::new(4);
    let keep = LazyImage::mount(&observer, "keep", Span::new(0, 12));
    let gone = LazyImage::mount(&observer, "gone", Span::new(12, 12));
    assert_eq!(observer.observed_count(), 2);

    drop(gone);
    let fired = observer.check(Span::new(0, 40));
    assert_eq!(fired, vec![keep.target().unwrap()]);
    assert_eq!(observer.observed_count(), 0);
}

#[test]
fn relayout_moves_trigger_region() {
    let observer = ViewportObserver::new(0);
    let image = LazyImage::mount(&observer, "u", Span::new(60, 12));
    assert!(observer.check(Span::new(0, 24)).is_empty());

    // terminal widened: more columns, card moves up to the first row
    image.relayout(Span::new(0, 12));
    assert_eq!(observer.check(Span::new(0, 24)).len(), 1);
}

#[test]
fn many_cards_fire_independently() {
    let observer = ViewportObserver::new(2);
    let mut images: Vec<LazyImage> = (0..10)
        .map(|i| LazyImage::mount(&observer, format!("u{i}"), Span::new(i * 10, 10)))
        .collect();

    let fired = observer.check(Span::new(0, 25));
    // rows 0..27 touch cards 0, 1 and 2
    assert_eq!(fired.len(), 3);
    for image in images.iter_mut() {
        if image.target().is_some_and(|t| fired.contains(&t)) {
            assert!(image.on_intersect());
        }
    }
    assert_eq!(images.iter().filter(|i| i.is_loaded()).count(), 3);
    assert_eq!(observer.observed_count(), 7);
}
