//! Scroll through a stacked page layout and check what the page controller
//! derives at each stop.

use folio::types::SectionId;
use folio::{
    CardLayer, HoverTransition, Interaction, MotionConfig, PhotoLayer, PortfolioPage, Rect,
    RegionId, SubmitOutcome, PHOTO_REGION,
};
use pretty_assertions::assert_eq;

const WIDTH: f32 = 1280.0;
const VIEWPORT_HEIGHT: f32 = 800.0;

/// Section tops and heights in document space
const LAYOUT: [(SectionId, f32, f32); 6] = [
    (SectionId::Hero, 0.0, 800.0),
    (SectionId::About, 800.0, 900.0),
    (SectionId::Skills, 1700.0, 600.0),
    (SectionId::Projects, 2300.0, 1200.0),
    (SectionId::Education, 3500.0, 600.0),
    (SectionId::Contact, 4100.0, 700.0),
];

/// Photo sits inside the about section
const PHOTO: (f32, f32) = (900.0, 400.0);

fn regions() -> Vec<(RegionId, Rect)> {
    let mut regions: Vec<(RegionId, Rect)> = LAYOUT
        .iter()
        .map(|(id, top, height)| (RegionId::from(*id), Rect::from_origin_size(0.0, *top, WIDTH, *height)))
        .collect();
    regions.push((
        RegionId::from(PHOTO_REGION),
        Rect::from_origin_size(700.0, PHOTO.0, 400.0, PHOTO.1),
    ));
    regions
}

fn scroll_to(page: &mut PortfolioPage, offset: f32) {
    page.on_scroll(offset);
    let viewport = Rect::from_origin_size(0.0, offset, WIDTH, VIEWPORT_HEIGHT);
    page.on_layout(viewport, regions());
}

fn page() -> PortfolioPage {
    // Initialize logging for tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter("folio=debug")
        .try_init();

    let portfolio = folio::content::parse_portfolio(folio::content::PORTFOLIO_YAML).unwrap();
    PortfolioPage::new(&portfolio, MotionConfig::default()).unwrap()
}

fn highlighted(page: &PortfolioPage) -> Vec<&'static str> {
    page.nav_entries()
        .into_iter()
        .filter(|e| e.highlighted)
        .map(|e| e.label)
        .collect()
}

#[test]
fn test_scroll_walks_active_section() {
    let mut page = page();

    scroll_to(&mut page, 0.0);
    assert_eq!(page.active_section(), SectionId::Hero);
    assert!(highlighted(&page).is_empty());

    scroll_to(&mut page, 1000.0);
    assert_eq!(page.active_section(), SectionId::About);
    assert_eq!(highlighted(&page), vec!["About"]);

    scroll_to(&mut page, 2400.0);
    assert_eq!(page.active_section(), SectionId::Projects);

    scroll_to(&mut page, 4000.0);
    assert_eq!(page.active_section(), SectionId::Contact);
    assert_eq!(highlighted(&page), vec!["Contact"]);

    scroll_to(&mut page, 1000.0);
    assert_eq!(page.active_section(), SectionId::About);
}

#[test]
fn test_photo_reveals_and_hides_with_scroll() {
    let mut page = page();

    scroll_to(&mut page, 0.0);
    assert!(!page.photo_state().visible);
    assert_eq!(
        page.photo_style(PhotoLayer::Frame),
        PhotoLayer::Frame.style(Interaction::new(false, false))
    );

    scroll_to(&mut page, 1000.0);
    assert!(page.photo_state().visible);
    assert_eq!(
        page.photo_style(PhotoLayer::Frame),
        PhotoLayer::Frame.style(Interaction::new(true, false))
    );

    scroll_to(&mut page, 2400.0);
    assert!(!page.photo_state().visible);
}

#[test]
fn test_photo_hover_combines_with_visibility() {
    let mut page = page();
    scroll_to(&mut page, 1000.0);

    assert_eq!(page.hover_photo(true), Some(HoverTransition::Entered));
    assert_eq!(page.hover_photo(true), None);
    assert_eq!(page.photo_state(), Interaction::new(true, true));

    assert_eq!(page.hover_photo(false), Some(HoverTransition::Left));
    assert_eq!(page.photo_state(), Interaction::new(true, false));
}

#[test]
fn test_hero_background_follows_scroll() {
    let mut page = page();
    scroll_to(&mut page, 1000.0);
    assert_eq!(page.hero_background_style().translate_y, 500.0);

    page.on_scroll(-40.0);
    assert_eq!(page.hero_background_style().translate_y, 0.0);
}

#[test]
fn test_card_hover_is_per_card() {
    let mut page = page();
    page.hover_card(1, true);

    assert!(page.card_hovered(1));
    assert!(!page.card_hovered(0));
    assert_eq!(page.card_style(1, CardLayer::Card), CardLayer::Card.style(true));
    assert_eq!(page.card_style(0, CardLayer::Card), CardLayer::Card.style(false));
}

#[test]
fn test_skill_tiles_stagger() {
    let page = page();
    let delays: Vec<f32> = (0..3).map(|i| page.skill_transition(i).delay).collect();
    assert_eq!(delays.len(), 3);
    assert!(delays[0] < delays[1] && delays[1] < delays[2]);
}

#[test]
fn test_contact_submit_is_inert() {
    let mut page = page();
    page.contact_form_mut().name = "Ada".into();
    assert_eq!(page.submit_contact(), SubmitOutcome::NoEndpoint);
    assert_eq!(page.contact_form().name, "Ada");
}
