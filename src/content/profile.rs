/// Static page content
///
/// Hero, contact links, scholarship video and the gallery cards. None of it
/// is loaded at runtime; asset paths are relative to the site root and are
/// only ever linked to, never read.

use serde::Serialize;

/// Contact card and hero text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub headline: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub resume: &'static str,
    pub video: &'static str,
}

impl Profile {
    /// `mailto:` link for the email address
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Footer line for the given year
    pub fn footer(&self, year: i32) -> String {
        format!("© {} {} · {}", year, self.name, self.email)
    }
}

/// One card in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: Option<&'static str>,
    pub caption: Option<&'static str>,
}

pub const PROFILE: Profile = Profile {
    name: "Stefan Soh",
    title: "Student-Athlete • Computer Science & Physics",
    headline: "Data, Hoops, and Drive.",
    email: "stefanxsoh@gmail.com",
    linkedin: "https://www.linkedin.com/in/stefanxsoh/",
    github: "https://github.com/sxsohh",
    resume: "/StefanSohResume.pdf",
    video: "https://www.youtube.com/embed/lsdA_NqvzGw",
};

pub const HERO_PHOTO: &str = "/b2d57fba-3143-420a-82bd-79fc4a804852.jpg";

/// Badges under the hero
pub const HIGHLIGHTS: &[&str] = &["CS & Physics @ Elmhurst", "$20K Scholarship Winner"];

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        src: "/5Y2A6586_Original.JPG",
        alt: "Gym jumper",
        title: Some("Gym Nights"),
        caption: Some("Reps, rhythm, repeat."),
    },
    GalleryItem {
        src: "/20230515181649_IMG_0429 (2).jpeg",
        alt: "On the move",
        title: Some("Road Work"),
        caption: Some("Travel. Train. Tinker."),
    },
    GalleryItem {
        src: "/4B59FFD2-E6BF-4F06-BDE6-2772AF5ADCF9.jpg",
        alt: "Early days",
        title: Some("Throwback"),
        caption: Some("Patience. Pace. Perspective."),
    },
    GalleryItem {
        src: "/IMG_5782.JPG",
        alt: "Sunrise / clouds",
        title: Some("Above the Clouds"),
        caption: Some("Breathe. Climb. Repeat."),
    },
    GalleryItem {
        src: HERO_PHOTO,
        alt: "Court work",
        title: None,
        caption: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto() {
        assert_eq!(PROFILE.mailto(), "mailto:stefanxsoh@gmail.com");
    }

    #[test]
    fn test_footer() {
        let footer = PROFILE.footer(2025);
        assert!(footer.starts_with("© 2025 Stefan Soh"));
        assert!(footer.ends_with(PROFILE.email));
    }

    #[test]
    fn test_gallery_paths_are_site_relative() {
        assert_eq!(GALLERY.len(), 5);
        assert!(GALLERY.iter().all(|item| item.src.starts_with('/')));
        assert!(GALLERY.iter().all(|item| !item.alt.is_empty()));
    }
}
