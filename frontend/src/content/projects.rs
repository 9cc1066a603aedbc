use super::catalog::{Catalog, ContentRecord};

#[derive(Debug, PartialEq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub year: u16,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub summary: &'static str,
    pub services: &'static [&'static str],
    pub challenge: &'static str,
    pub solution: &'static str,
    /// `(figure, label)` pairs.
    pub results: &'static [(&'static str, &'static str)],
    pub gallery: &'static [&'static str],
}

impl ContentRecord for Project {
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

pub fn catalog() -> Catalog<Project> {
    Catalog::new(&PROJECTS)
}

/// Projects in `category`, or all of them for `None`.
pub fn in_category(category: Option<&str>) -> Vec<&'static Project> {
    catalog()
        .all()
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect()
}

static PROJECTS: [Project; 4] = [
    Project {
        slug: "northwind-rebrand",
        title: "Northwind Outfitters",
        client: "Northwind Outfitters",
        year: 2025,
        category: "Branding",
        tags: &["identity", "retail"],
        image: "/assets/projects/northwind.webp",
        summary: "A full identity refresh for an outdoor retailer moving from catalogue sales to a digital-first storefront.",
        services: &["Brand strategy", "Visual identity", "Packaging"],
        challenge: "Forty years of catalogue heritage and a logo nobody could read below 32px. The brand had to survive on a phone screen without losing the customers who remembered the paper catalogue.",
        solution: "We kept the compass mark, redrew it on a pixel grid and built a type system around a single variable family. Every catalogue colour was mapped to an accessible screen palette.",
        results: &[("+38%", "online conversion"), ("3x", "newsletter sign-ups"), ("12", "store fronts rebranded")],
        gallery: &["/assets/projects/northwind-1.webp", "/assets/projects/northwind-2.webp"],
    },
    Project {
        slug: "lumen-health-app",
        title: "Lumen Health",
        client: "Lumen Health",
        year: 2025,
        category: "Product",
        tags: &["app", "health", "motion"],
        image: "/assets/projects/lumen.webp",
        summary: "Patient onboarding for a telehealth startup, redesigned around one question per screen.",
        services: &["UX research", "Product design", "Motion"],
        challenge: "Half of new patients abandoned onboarding before their first appointment. The flow asked for insurance details before explaining what the service did.",
        solution: "We reordered the flow to lead with the appointment, split every form into single questions and used motion to show progress instead of a step counter.",
        results: &[("-52%", "onboarding drop-off"), ("4.8", "app store rating")],
        gallery: &["/assets/projects/lumen-1.webp", "/assets/projects/lumen-2.webp"],
    },
    Project {
        slug: "atlas-conference",
        title: "Atlas Summit 2025",
        client: "Atlas Foundation",
        year: 2024,
        category: "Campaign",
        tags: &["event", "motion", "web"],
        image: "/assets/projects/atlas.webp",
        summary: "Campaign site and stage graphics for a three-day design conference.",
        services: &["Campaign", "Web development", "Stage graphics"],
        challenge: "The speaker line-up changed weekly and the site had to stay fast on conference Wi-Fi.",
        solution: "A statically generated site fed from the organisers' spreadsheet, with scroll-driven speaker reveals that degrade to plain cards on slow devices.",
        results: &[("1.4s", "median load time"), ("2,900", "tickets sold")],
        gallery: &["/assets/projects/atlas-1.webp"],
    },
    Project {
        slug: "verde-coffee-commerce",
        title: "Verde Coffee",
        client: "Verde Coffee Roasters",
        year: 2024,
        category: "Web",
        tags: &["commerce", "web", "retail"],
        image: "/assets/projects/verde.webp",
        summary: "Subscription storefront for a specialty roaster, built to make re-ordering a two-tap job.",
        services: &["E-commerce", "Web development", "Photography"],
        challenge: "Subscribers had to log in and rebuild their basket every month.",
        solution: "Saved blends, one-tap re-order from email and a roast calendar that tells customers exactly when their beans ship.",
        results: &[("+61%", "repeat orders"), ("-30%", "support tickets")],
        gallery: &["/assets/projects/verde-1.webp", "/assets/projects/verde-2.webp"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_has_a_next() {
        for project in catalog().all() {
            let next = catalog().next_after(project.slug).unwrap();
            assert_ne!(next.slug, project.slug);
        }
    }

    #[test]
    fn category_filter() {
        let web: Vec<_> = in_category(Some("Web")).iter().map(|p| p.slug).collect();
        assert_eq!(web, vec!["verde-coffee-commerce"]);
        assert_eq!(in_category(None).len(), catalog().len());
    }

    #[test]
    fn related_projects_follow_catalog_order() {
        let related: Vec<_> = catalog()
            .related("atlas-conference", 3)
            .iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(related, vec!["lumen-health-app", "verde-coffee-commerce"]);
    }
}
