use chrono::NaiveDate;

use super::catalog::{Catalog, ContentRecord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
    Quote(&'static str),
    List(&'static [&'static str]),
}

#[derive(Debug, PartialEq)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    /// ISO `yyyy-mm-dd`.
    pub date: &'static str,
    pub author: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub excerpt: &'static str,
    pub read_minutes: u8,
    pub body: &'static [Block],
}

impl Article {
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// "August 13, 2025", or the raw string if it does not parse.
    pub fn display_date(&self) -> String {
        self.published()
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.to_string())
    }
}

impl ContentRecord for Article {
    fn slug(&self) -> &str {
        self.slug
    }

    fn category(&self) -> &str {
        self.category
    }

    fn tags(&self) -> &[&'static str] {
        self.tags
    }
}

pub fn catalog() -> Catalog<Article> {
    Catalog::new(&ARTICLES)
}

/// Newest first; undated entries sink to the bottom in catalog order.
pub fn newest_first(articles: &[&'static Article]) -> Vec<&'static Article> {
    let mut sorted = articles.to_vec();
    sorted.sort_by(|a, b| b.published().cmp(&a.published()));
    sorted
}

/// Articles carrying `tag`, or all of them for `None`.
pub fn with_tag(tag: Option<&str>) -> Vec<&'static Article> {
    let all: Vec<&'static Article> = catalog().all().iter().collect();
    match tag {
        Some(tag) => all.into_iter().filter(|a| a.tags.iter().any(|t| *t == tag)).collect(),
        None => all,
    }
}

static ARTICLES: [Article; 5] = [
    Article {
        slug: "motion-with-purpose",
        title: "Motion With Purpose: Animating Interfaces Without the Noise",
        date: "2025-09-02",
        author: "Mira Holt",
        image: "/assets/articles/motion-with-purpose.webp",
        category: "Design",
        tags: &["motion", "ux"],
        excerpt: "Animation earns its place when it explains a change. A look at how we decide what moves, how far and for how long.",
        read_minutes: 6,
        body: &[
            Block::Paragraph("Every transition on a page costs the reader a little attention. The question we ask on every project is simple: does this movement tell the reader something they would otherwise miss?"),
            Block::Heading("Start from the state change"),
            Block::Paragraph("We sketch the before and after of each interaction first. Motion only gets added where the two states are far enough apart that a reader could lose their place."),
            Block::List(&[
                "Entrances reveal hierarchy, they do not decorate it",
                "Scroll-linked effects stay under 300px of travel",
                "Nothing loops unless the user can pause it",
            ]),
            Block::Quote("If you notice the animation before the content, it is too loud."),
            Block::Heading("Springs over curves"),
            Block::Paragraph("Spring-driven values settle naturally when input changes mid-flight, which is exactly what happens when people scroll. Fixed-duration curves restart and stutter."),
        ],
    },
    Article {
        slug: "brand-systems-that-scale",
        title: "Brand Systems That Scale Past the Launch Deck",
        date: "2025-07-18",
        author: "Jonas Reyes",
        image: "/assets/articles/brand-systems.webp",
        category: "Branding",
        tags: &["branding", "design-systems"],
        excerpt: "A logo is the easy part. What survives a year of real campaigns is the system underneath it.",
        read_minutes: 8,
        body: &[
            Block::Paragraph("Launch decks show a brand at its best. Six months later the same brand is being stretched across event banners, onboarding emails and a partner's co-branded landing page."),
            Block::Heading("Tokens before templates"),
            Block::Paragraph("We ship colour, type and spacing as tokens that design and engineering both consume. Templates come later and are built from those tokens only."),
            Block::List(&[
                "One source of truth for colour and type",
                "Usage examples for the awkward cases",
                "A named owner for every component",
            ]),
        ],
    },
    Article {
        slug: "performance-budget-for-marketing-sites",
        title: "A Performance Budget for Marketing Sites",
        date: "2025-10-01",
        author: "Priya Natarajan",
        image: "/assets/articles/performance-budget.webp",
        category: "Engineering",
        tags: &["performance", "web"],
        excerpt: "Heavy hero videos and scroll effects do not have to mean slow pages. Here is the budget we hold every launch to.",
        read_minutes: 5,
        body: &[
            Block::Paragraph("Marketing pages are judged in the first two seconds. We set the budget before the first design review so the creative direction is shaped by it rather than cut by it later."),
            Block::Heading("The numbers"),
            Block::List(&[
                "Largest contentful paint under 2.0s on a mid-range phone",
                "No layout shift from animated elements",
                "Scroll handlers do one layout read per frame",
            ]),
            Block::Paragraph("The last rule is the one teams break most often. One bounding-rect read per tracked element per frame, and no writes in between."),
        ],
    },
    Article {
        slug: "writing-for-landing-pages",
        title: "Writing for Landing Pages: Fewer Words, Better Order",
        date: "2025-05-27",
        author: "Mira Holt",
        image: "/assets/articles/writing-landing-pages.webp",
        category: "Strategy",
        tags: &["copywriting", "ux"],
        excerpt: "Most landing page copy is fine sentence by sentence and wrong in sequence. Order is the lever.",
        read_minutes: 4,
        body: &[
            Block::Paragraph("Visitors skim in a predictable pattern: headline, first proof point, price, and then whatever is nearest the button. We write in that order."),
            Block::Quote("Say what it is, prove it once, then get out of the way."),
            Block::Paragraph("Testimonials belong next to the claim they support, not in a carousel at the bottom of the page."),
        ],
    },
    Article {
        slug: "smooth-scroll-done-right",
        title: "Smooth Scroll Done Right",
        date: "2025-08-13",
        author: "Priya Natarajan",
        image: "/assets/articles/smooth-scroll.webp",
        category: "Engineering",
        tags: &["motion", "web"],
        excerpt: "Eased scrolling feels premium until it fights the user. How to keep it honest with the browser.",
        read_minutes: 7,
        body: &[
            Block::Paragraph("An eased scroll position has to agree with the browser's own scroll offset every frame. Integrating wheel deltas on their own drifts within minutes."),
            Block::Heading("Resync every frame"),
            Block::Paragraph("Read the native position first. If someone else moved it, such as the scrollbar, the keyboard or find-in-page, drop the animation and follow."),
            Block::List(&[
                "Never hijack pinch zoom",
                "Leave touch to the platform unless asked",
                "Reset to the top on navigation, except for anchors",
            ]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let all = catalog().all();
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| b.slug != a.slug), "duplicate {}", a.slug);
        }
    }

    #[test]
    fn every_date_parses() {
        assert!(catalog().all().iter().all(|a| a.published().is_some()));
    }

    #[test]
    fn display_date_is_long_form() {
        let article = catalog().find("smooth-scroll-done-right").unwrap();
        assert_eq!(article.display_date(), "August 13, 2025");
    }

    #[test]
    fn newest_first_orders_by_date() {
        let sorted = newest_first(&with_tag(None));
        assert_eq!(sorted[0].slug, "performance-budget-for-marketing-sites");
        assert_eq!(sorted[sorted.len() - 1].slug, "writing-for-landing-pages");
    }

    #[test]
    fn tag_filter() {
        let motion: Vec<_> = with_tag(Some("motion")).iter().map(|a| a.slug).collect();
        assert_eq!(motion, vec!["motion-with-purpose", "smooth-scroll-done-right"]);
        assert!(with_tag(Some("unknown")).is_empty());
    }

    #[test]
    fn related_articles_share_category_or_tag() {
        let related: Vec<_> = catalog()
            .related("smooth-scroll-done-right", 3)
            .iter()
            .map(|a| a.slug)
            .collect();
        assert_eq!(
            related,
            vec!["motion-with-purpose", "performance-budget-for-marketing-sites"]
        );
    }
}
