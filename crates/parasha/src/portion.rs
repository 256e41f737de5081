//! The weekly Torah portions and the reading assigned to a Sabbath.

use crate::config::Language;

/// One of the 54 weekly Torah portions, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parasha {
    // Genesis
    Bereshit,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSarah,
    Toldot,
    Vayetzei,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    // Exodus
    Shemot,
    Vaera,
    Bo,
    Beshalach,
    Yitro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiTisa,
    Vayakhel,
    Pekudei,
    // Leviticus
    Vayikra,
    Tzav,
    Shemini,
    Tazria,
    Metzora,
    AchareiMot,
    Kedoshim,
    Emor,
    Behar,
    Bechukotai,
    // Numbers
    Bamidbar,
    Nasso,
    Behaalotcha,
    Shelach,
    Korach,
    Chukat,
    Balak,
    Pinchas,
    Matot,
    Masei,
    // Deuteronomy
    Devarim,
    Vaetchanan,
    Eikev,
    Reeh,
    Shoftim,
    KiTeitzei,
    KiTavo,
    Nitzavim,
    Vayeilech,
    Haazinu,
    VezotHaberakhah,
}

impl Parasha {
    /// All portions in reading order.
    pub const ALL: [Parasha; 54] = [
        Self::Bereshit,
        Self::Noach,
        Self::LechLecha,
        Self::Vayera,
        Self::ChayeiSarah,
        Self::Toldot,
        Self::Vayetzei,
        Self::Vayishlach,
        Self::Vayeshev,
        Self::Miketz,
        Self::Vayigash,
        Self::Vayechi,
        Self::Shemot,
        Self::Vaera,
        Self::Bo,
        Self::Beshalach,
        Self::Yitro,
        Self::Mishpatim,
        Self::Terumah,
        Self::Tetzaveh,
        Self::KiTisa,
        Self::Vayakhel,
        Self::Pekudei,
        Self::Vayikra,
        Self::Tzav,
        Self::Shemini,
        Self::Tazria,
        Self::Metzora,
        Self::AchareiMot,
        Self::Kedoshim,
        Self::Emor,
        Self::Behar,
        Self::Bechukotai,
        Self::Bamidbar,
        Self::Nasso,
        Self::Behaalotcha,
        Self::Shelach,
        Self::Korach,
        Self::Chukat,
        Self::Balak,
        Self::Pinchas,
        Self::Matot,
        Self::Masei,
        Self::Devarim,
        Self::Vaetchanan,
        Self::Eikev,
        Self::Reeh,
        Self::Shoftim,
        Self::KiTeitzei,
        Self::KiTavo,
        Self::Nitzavim,
        Self::Vayeilech,
        Self::Haazinu,
        Self::VezotHaberakhah,
    ];

    /// Returns the position of this portion in reading order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the English transliteration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bereshit => "Bereshit",
            Self::Noach => "Noach",
            Self::LechLecha => "Lech Lecha",
            Self::Vayera => "Vayera",
            Self::ChayeiSarah => "Chayei Sarah",
            Self::Toldot => "Toldot",
            Self::Vayetzei => "Vayetzei",
            Self::Vayishlach => "Vayishlach",
            Self::Vayeshev => "Vayeshev",
            Self::Miketz => "Miketz",
            Self::Vayigash => "Vayigash",
            Self::Vayechi => "Vayechi",
            Self::Shemot => "Shemot",
            Self::Vaera => "Vaera",
            Self::Bo => "Bo",
            Self::Beshalach => "Beshalach",
            Self::Yitro => "Yitro",
            Self::Mishpatim => "Mishpatim",
            Self::Terumah => "Terumah",
            Self::Tetzaveh => "Tetzaveh",
            Self::KiTisa => "Ki Tisa",
            Self::Vayakhel => "Vayakhel",
            Self::Pekudei => "Pekudei",
            Self::Vayikra => "Vayikra",
            Self::Tzav => "Tzav",
            Self::Shemini => "Shemini",
            Self::Tazria => "Tazria",
            Self::Metzora => "Metzora",
            Self::AchareiMot => "Acharei Mot",
            Self::Kedoshim => "Kedoshim",
            Self::Emor => "Emor",
            Self::Behar => "Behar",
            Self::Bechukotai => "Bechukotai",
            Self::Bamidbar => "Bamidbar",
            Self::Nasso => "Nasso",
            Self::Behaalotcha => "Beha'alotcha",
            Self::Shelach => "Shelach",
            Self::Korach => "Korach",
            Self::Chukat => "Chukat",
            Self::Balak => "Balak",
            Self::Pinchas => "Pinchas",
            Self::Matot => "Matot",
            Self::Masei => "Masei",
            Self::Devarim => "Devarim",
            Self::Vaetchanan => "Vaetchanan",
            Self::Eikev => "Eikev",
            Self::Reeh => "Re'eh",
            Self::Shoftim => "Shoftim",
            Self::KiTeitzei => "Ki Teitzei",
            Self::KiTavo => "Ki Tavo",
            Self::Nitzavim => "Nitzavim",
            Self::Vayeilech => "Vayeilech",
            Self::Haazinu => "Ha'azinu",
            Self::VezotHaberakhah => "Vezot Haberakhah",
        }
    }

    /// Returns the Hebrew name.
    pub fn hebrew_name(self) -> &'static str {
        match self {
            Self::Bereshit => "בראשית",
            Self::Noach => "נח",
            Self::LechLecha => "לך לך",
            Self::Vayera => "וירא",
            Self::ChayeiSarah => "חיי שרה",
            Self::Toldot => "תולדות",
            Self::Vayetzei => "ויצא",
            Self::Vayishlach => "וישלח",
            Self::Vayeshev => "וישב",
            Self::Miketz => "מקץ",
            Self::Vayigash => "ויגש",
            Self::Vayechi => "ויחי",
            Self::Shemot => "שמות",
            Self::Vaera => "וארא",
            Self::Bo => "בא",
            Self::Beshalach => "בשלח",
            Self::Yitro => "יתרו",
            Self::Mishpatim => "משפטים",
            Self::Terumah => "תרומה",
            Self::Tetzaveh => "תצוה",
            Self::KiTisa => "כי תשא",
            Self::Vayakhel => "ויקהל",
            Self::Pekudei => "פקודי",
            Self::Vayikra => "ויקרא",
            Self::Tzav => "צו",
            Self::Shemini => "שמיני",
            Self::Tazria => "תזריע",
            Self::Metzora => "מצורע",
            Self::AchareiMot => "אחרי מות",
            Self::Kedoshim => "קדשים",
            Self::Emor => "אמור",
            Self::Behar => "בהר",
            Self::Bechukotai => "בחוקותי",
            Self::Bamidbar => "במדבר",
            Self::Nasso => "נשא",
            Self::Behaalotcha => "בהעלותך",
            Self::Shelach => "שלח",
            Self::Korach => "קרח",
            Self::Chukat => "חוקת",
            Self::Balak => "בלק",
            Self::Pinchas => "פינחס",
            Self::Matot => "מטות",
            Self::Masei => "מסעי",
            Self::Devarim => "דברים",
            Self::Vaetchanan => "ואתחנן",
            Self::Eikev => "עקב",
            Self::Reeh => "ראה",
            Self::Shoftim => "שופטים",
            Self::KiTeitzei => "כי תצא",
            Self::KiTavo => "כי תבוא",
            Self::Nitzavim => "נצבים",
            Self::Vayeilech => "וילך",
            Self::Haazinu => "האזינו",
            Self::VezotHaberakhah => "וזאת הברכה",
        }
    }

    /// Returns the name in the requested language.
    pub fn name_in(self, language: Language) -> &'static str {
        match language {
            Language::English => self.name(),
            Language::Hebrew => self.hebrew_name(),
        }
    }
}

/// The portion or portions read on one Sabbath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reading {
    /// A single portion.
    Single(Parasha),
    /// Two consecutive portions read together.
    Double(Parasha, Parasha),
}

impl Reading {
    /// Returns the portions in this reading, in order.
    pub fn portions(&self) -> Vec<Parasha> {
        match *self {
            Self::Single(p) => vec![p],
            Self::Double(a, b) => vec![a, b],
        }
    }

    /// Returns the first (or only) portion.
    pub fn first(&self) -> Parasha {
        match *self {
            Self::Single(p) | Self::Double(p, _) => p,
        }
    }

    /// Renders the reading as one name, or two names joined by a hyphen.
    pub fn label(&self, language: Language) -> String {
        match *self {
            Self::Single(p) => p.name_in(language).to_string(),
            Self::Double(a, b) => format!("{}-{}", a.name_in(language), b.name_in(language)),
        }
    }
}
