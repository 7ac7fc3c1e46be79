use crate::domain::model::{Icon, Link, LinkBioData, UserProfile};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use uuid::{Builder, Uuid};

pub const DEFAULT_BACKGROUND_COLOR: &str = "#1a1a1a";
pub const DEFAULT_BUTTON_COLOR: &str = "#00d632";

/// Starter dataset for a fresh store: one profile and three links, the
/// same shape the production service seeds new accounts with. A seed
/// makes the generated ids and avatar reproducible.
pub fn generate(seed: Option<u64>) -> LinkBioData {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let avatar_id: u32 = rng.gen_range(1..=9_999_999);
    let profile = UserProfile {
        id: random_id(&mut rng),
        username: "creator".to_string(),
        display_name: "Content Creator".to_string(),
        bio: "Content creator".to_string(),
        avatar: format!("https://avatars.githubusercontent.com/u/{}", avatar_id),
        background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        button_color: DEFAULT_BUTTON_COLOR.to_string(),
    };

    let links = vec![
        Link {
            id: random_id(&mut rng),
            title: "Instagram".to_string(),
            url: "https://instagram.com/creator".to_string(),
            is_active: true,
            icon: Icon::Instagram,
            order: 1,
        },
        Link {
            id: random_id(&mut rng),
            title: "YouTube".to_string(),
            url: "https://youtube.com/@creator".to_string(),
            is_active: true,
            icon: Icon::Youtube,
            order: 2,
        },
        Link {
            id: random_id(&mut rng),
            title: "Website".to_string(),
            url: "https://example.com".to_string(),
            is_active: false,
            icon: Icon::Globe,
            order: 3,
        },
    ];

    LinkBioData { profile, links }
}

fn random_id(rng: &mut SmallRng) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}
