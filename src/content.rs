//! Copy shown on the landing page. Everything here is fixed at compile time and
//! rendered in the order it is listed.

use crate::components::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramVariant {
    Light,
    Highlight,
}

impl ProgramVariant {
    pub fn is_highlight(self) -> bool {
        matches!(self, ProgramVariant::Highlight)
    }

    pub fn card_class(self) -> &'static str {
        match self {
            ProgramVariant::Light => "program-card light",
            ProgramVariant::Highlight => "program-card highlight",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Program {
    pub title: &'static str,
    pub age: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub variant: ProgramVariant,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reason {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Small fact tile in the about section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Tentang", href: "#about" },
    NavLink { label: "Program", href: "#programs" },
    NavLink { label: "Keunggulan", href: "#why-us" },
    NavLink { label: "Kontak", href: "#contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Tentang Kami", href: "#about" },
    NavLink { label: "Program Kursus", href: "#programs" },
    NavLink { label: "Keunggulan", href: "#why-us" },
    NavLink { label: "Kontak", href: "#contact" },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy Policy", href: "#" },
    NavLink { label: "Terms of Service", href: "#" },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Clock,
        title: "Sejak 2015",
        description: "Berpengalaman lebih dari 8 tahun mencetak lulusan kompeten.",
    },
    Highlight {
        icon: Icon::Users,
        title: "Small Class",
        description: "Maksimal 8 siswa per kelas untuk fokus belajar yang optimal.",
    },
    Highlight {
        icon: Icon::Award,
        title: "Hybrid Learning",
        description: "Fleksibilitas belajar tatap muka maupun online dari mana saja.",
    },
    Highlight {
        icon: Icon::CheckCircle,
        title: "Native Tutors",
        description: "Bimbingan langsung dari pengajar penutur asli dan lokal bersertifikasi.",
    },
];

pub const PROGRAMS: &[Program] = &[
    Program {
        title: "Kids Class",
        age: "Usia 6-12 Tahun",
        description: "Belajar bahasa Inggris dengan cara yang menyenangkan melalui permainan, lagu, dan aktivitas kreatif.",
        features: &["Phonics & Vocabulary", "Interactive Games", "Creative Projects"],
        variant: ProgramVariant::Light,
    },
    Program {
        title: "Teen Class",
        age: "Usia 13-18 Tahun",
        description: "Mempersiapkan remaja untuk komunikasi akademik dan sosial dengan kurikulum yang relevan.",
        features: &["Academic Writing", "Public Speaking", "Exam Preparation"],
        variant: ProgramVariant::Highlight,
    },
    Program {
        title: "Adult Class",
        age: "Usia 19+ Tahun",
        description: "Fokus pada komunikasi profesional, karir, dan persiapan tes internasional seperti IELTS/TOEFL.",
        features: &["Business English", "IELTS/TOEFL Prep", "Daily Conversation"],
        variant: ProgramVariant::Light,
    },
];

pub const REASONS: &[Reason] = &[
    Reason {
        icon: Icon::Users,
        title: "Professional Tutors",
        description: "Pengajar berpengalaman dengan sertifikasi internasional (CELTA/TESOL).",
    },
    Reason {
        icon: Icon::MessageSquare,
        title: "Interactive Method",
        description: "Metode belajar yang mengutamakan partisipasi aktif siswa, bukan sekadar teori.",
    },
    Reason {
        icon: Icon::Clock,
        title: "Flexible Schedule",
        description: "Pilihan waktu belajar yang fleksibel, cocok untuk pelajar maupun pekerja.",
    },
    Reason {
        icon: Icon::Award,
        title: "Speaking Focus",
        description: "Fokus utama pada kemampuan berbicara agar Anda lebih percaya diri.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Andini Putri",
        role: "Mahasiswa",
        quote: "Belajar di LinguistPro sangat seru! Tutornya asik dan materinya gampang dimengerti. Sekarang saya jauh lebih pede ngomong bahasa Inggris.",
    },
    Testimonial {
        name: "Budi Santoso",
        role: "Marketing Manager",
        quote: "Program Adult Class sangat membantu karir saya. Fokus pada Business English membuat presentasi saya di depan klien asing jadi lebih lancar.",
    },
    Testimonial {
        name: "Rizky Ramadhan",
        role: "Siswa SMA",
        quote: "Persiapan IELTS di sini mantap banget. Strategi yang diajarkan sangat efektif. Akhirnya saya dapat skor yang saya targetkan!",
    },
];

pub const FOUNDING_YEAR: u32 = 2015;
pub const ALUMNI_RATING: f32 = 4.9;

pub const STREET_ADDRESS: &str = "Jl. Pendidikan No. 123";
pub const DISTRICT: &str = "Kec. Kebayoran Baru";
pub const CITY: &str = "Jakarta Selatan";
pub const POSTAL_CODE: &str = "12110";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1523240795612-9a054b0db644?auto=format&fit=crop&q=80&w=1000";
pub const CLASSROOM_IMAGE: &str =
    "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=1000";

/// Seeds for the alumni avatar strip in the why-us section.
pub const ALUMNI_AVATAR_SEEDS: std::ops::RangeInclusive<u32> = 11..=14;

pub fn avatar_url(seed: u32) -> String {
    format!("https://picsum.photos/seed/{}/100/100", seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_section_anchors() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, ["#about", "#programs", "#why-us", "#contact"]);
    }

    #[test]
    fn only_the_teen_program_is_highlighted() {
        let highlighted: Vec<_> = PROGRAMS
            .iter()
            .filter(|p| p.variant.is_highlight())
            .map(|p| p.title)
            .collect();
        assert_eq!(highlighted, ["Teen Class"]);
        assert!(PROGRAMS.iter().all(|p| p.features.len() == 3));
    }

    #[test]
    fn testimonial_initial_is_first_letter() {
        let initials: Vec<_> = TESTIMONIALS.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, ["A", "B", "R"]);

        let anonymous = Testimonial { name: "", role: "", quote: "" };
        assert_eq!(anonymous.initial(), "");
    }

    #[test]
    fn avatar_urls_use_the_seed() {
        let urls: Vec<_> = ALUMNI_AVATAR_SEEDS.map(avatar_url).collect();
        assert_eq!(urls.len(), 4);
        assert_eq!(urls[0], "https://picsum.photos/seed/11/100/100");
        assert_eq!(urls[3], "https://picsum.photos/seed/14/100/100");
    }
}
