use folio_protocol::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechCategory {
    Language,
    Ml,
    Web,
    Tools,
}

impl TechCategory {
    pub const ALL: [TechCategory; 4] = [
        TechCategory::Language,
        TechCategory::Ml,
        TechCategory::Web,
        TechCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TechCategory::Language => "Languages",
            TechCategory::Ml => "ML & AI",
            TechCategory::Web => "Web Development",
            TechCategory::Tools => "Tools & Infrastructure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechItem {
    pub name: &'static str,
    pub category: TechCategory,
    pub color: Color,
}

const fn tech(name: &'static str, category: TechCategory, r: u8, g: u8, b: u8) -> TechItem {
    TechItem {
        name,
        category,
        color: Color::from_rgb8(r, g, b),
    }
}

pub const TECH_STACK: &[TechItem] = &[
    // Languages
    tech("Python", TechCategory::Language, 0x37, 0x76, 0xAB),
    tech("C++", TechCategory::Language, 0x00, 0x59, 0x9C),
    tech("Java", TechCategory::Language, 0x00, 0x73, 0x96),
    tech("TypeScript", TechCategory::Language, 0x31, 0x78, 0xC6),
    tech("JavaScript", TechCategory::Language, 0xF7, 0xDF, 0x1E),
    tech("SQL", TechCategory::Language, 0xCC, 0x29, 0x27),
    tech("Bash", TechCategory::Language, 0x4E, 0xAA, 0x25),
    tech("LaTeX", TechCategory::Language, 0x00, 0x80, 0x80),
    // ML/AI frameworks & libraries
    tech("PyTorch", TechCategory::Ml, 0xEE, 0x4C, 0x2C),
    tech("TensorFlow", TechCategory::Ml, 0xFF, 0x6F, 0x00),
    tech("Hugging Face", TechCategory::Ml, 0xFF, 0xD2, 0x1E),
    tech("scikit-learn", TechCategory::Ml, 0xF7, 0x93, 0x1E),
    tech("OpenCV", TechCategory::Ml, 0x5C, 0x3E, 0xE8),
    tech("Pandas", TechCategory::Ml, 0xE7, 0x04, 0x88),
    tech("NumPy", TechCategory::Ml, 0x01, 0x32, 0x43),
    tech("Keras", TechCategory::Ml, 0xD0, 0x00, 0x00),
    tech("ONNX", TechCategory::Ml, 0x00, 0x5C, 0xED),
    tech("Ray", TechCategory::Ml, 0x02, 0x8C, 0xF0),
    tech("Transformers", TechCategory::Ml, 0xFF, 0xD2, 0x1E),
    tech("LangChain", TechCategory::Ml, 0x00, 0xA6, 0x7E),
    tech("Weights & Biases", TechCategory::Ml, 0xFF, 0xBE, 0x00),
    tech("MLflow", TechCategory::Ml, 0x01, 0x94, 0xE2),
    tech("Stable Diffusion", TechCategory::Ml, 0x8B, 0x5C, 0xF6),
    // Web development
    tech("React", TechCategory::Web, 0x61, 0xDA, 0xFB),
    tech("Next.js", TechCategory::Web, 0x00, 0x00, 0x00),
    tech("FastAPI", TechCategory::Web, 0x00, 0x96, 0x88),
    tech("Flask", TechCategory::Web, 0x00, 0x00, 0x00),
    tech("Node.js", TechCategory::Web, 0x33, 0x99, 0x33),
    tech("REST API", TechCategory::Web, 0x00, 0x96, 0x88),
    // Tools & infrastructure
    tech("Docker", TechCategory::Tools, 0x24, 0x96, 0xED),
    tech("Git", TechCategory::Tools, 0xF0, 0x50, 0x32),
    tech("GitHub", TechCategory::Tools, 0x18, 0x17, 0x17),
    tech("AWS", TechCategory::Tools, 0xFF, 0x99, 0x00),
    tech("GCP", TechCategory::Tools, 0x42, 0x85, 0xF4),
    tech("Azure", TechCategory::Tools, 0x00, 0x78, 0xD4),
    tech("Linux", TechCategory::Tools, 0xFC, 0xC6, 0x24),
    tech("Apache Spark", TechCategory::Tools, 0xE2, 0x5A, 0x1C),
    tech("Airflow", TechCategory::Tools, 0x01, 0x7C, 0xEE),
    tech("Redis", TechCategory::Tools, 0xDC, 0x38, 0x2D),
    tech("PostgreSQL", TechCategory::Tools, 0x33, 0x67, 0x91),
    tech("Jenkins", TechCategory::Tools, 0xD2, 0x49, 0x39),
    tech("GitHub Actions", TechCategory::Tools, 0x20, 0x88, 0xFF),
    tech("Jupyter", TechCategory::Tools, 0xF3, 0x76, 0x26),
    tech("VS Code", TechCategory::Tools, 0x00, 0x7A, 0xCC),
    tech("Vim", TechCategory::Tools, 0x01, 0x97, 0x33),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_is_populated() {
        for category in TechCategory::ALL {
            assert!(
                TECH_STACK.iter().any(|t| t.category == category),
                "{} has no items",
                category.label()
            );
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, item) in TECH_STACK.iter().enumerate() {
            assert!(
                !TECH_STACK[..i].iter().any(|t| t.name == item.name),
                "duplicate tech name {:?}",
                item.name
            );
        }
    }
}
