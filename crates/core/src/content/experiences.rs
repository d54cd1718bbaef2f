#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub is_current: bool,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        year: "Present",
        title: "Machine Learning Scientist II",
        company: "Expedia Group",
        category: "Industry",
        description: "Architecting LLM evaluation frameworks, developing agentic prompt engineering platforms, and leading ChatGPT MCP server integrations.",
        is_current: true,
    },
    Experience {
        year: "2024",
        title: "Machine Learning Science Intern",
        company: "Expedia Group",
        category: "Internship",
        description: "Developed Image2Text pipelines using VLMs and deployed production image ranking systems generating significant revenue uplift.",
        is_current: false,
    },
    Experience {
        year: "2024-2025",
        title: "Graduate Teaching Assistant",
        company: "Georgia Institute of Technology",
        category: "Academic",
        description: "Deep Learning course TA. Created transformer assignments, held office hours, and mentored course projects.",
        is_current: false,
    },
    Experience {
        year: "2023-2025",
        title: "Master of Science in CS",
        company: "Georgia Institute of Technology",
        category: "Education",
        description: "GPA: 4.0/4.0. Specialization in AI, Perception, and Natural Systems.",
        is_current: false,
    },
    Experience {
        year: "2022-2023",
        title: "Research Assistant",
        company: "A*STAR",
        category: "Research",
        description: "Developed state-of-the-art deepfake detection models and scalable video processing pipelines.",
        is_current: false,
    },
    Experience {
        year: "2019-2023",
        title: "Bachelor of Computing",
        company: "National University of Singapore",
        category: "Education",
        description: "Distinction in AI. University Scholar Programme (Top 1%).",
    is_current: false,
    },
];

/// Sort key for a year string. Ranges count by their end year; an
/// ongoing entry sorts above every dated one. Deliberately clock-free so
/// ordering never changes under the reader's feet.
const ONGOING_SORT_YEAR: i32 = i32::MAX;

pub fn sort_year(year: &str) -> i32 {
    let lower = year.to_ascii_lowercase();
    if lower.contains("present") || lower.contains("now") {
        return ONGOING_SORT_YEAR;
    }
    year.rsplit('-')
        .next()
        .and_then(|end| end.trim().parse().ok())
        .unwrap_or(0)
}

/// Short label for the timeline dot: the end year, or "Now".
pub fn display_year(year: &str) -> &str {
    if year.to_ascii_lowercase().contains("present") {
        return "Now";
    }
    year.rsplit('-').next().map(str::trim).unwrap_or(year)
}

/// Timeline order: newest first; on a tie, education entries above the
/// rest.
pub fn sorted() -> Vec<&'static Experience> {
    let mut list: Vec<&'static Experience> = EXPERIENCES.iter().collect();
    list.sort_by(|a, b| {
        sort_year(b.year).cmp(&sort_year(a.year)).then_with(|| {
            let a_edu = a.category == "Education";
            let b_edu = b.category == "Education";
            b_edu.cmp(&a_edu)
        })
    });
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_sorts_first() {
        let list = sorted();
        assert_eq!(list[0].company, "Expedia Group");
        assert!(list[0].is_current);
    }

    #[test]
    fn range_uses_end_year() {
        assert_eq!(sort_year("2019-2023"), 2023);
        assert_eq!(sort_year("2024"), 2024);
        assert_eq!(sort_year("unknown"), 0);
    }

    #[test]
    fn education_wins_year_ties() {
        // 2024-2025 TA vs 2023-2025 MSc both end in 2025; MSc is
        // Education and must come first among the two.
        let list = sorted();
        let ta = list
            .iter()
            .position(|e| e.title.contains("Teaching Assistant"))
            .unwrap();
        let msc = list
            .iter()
            .position(|e| e.title.contains("Master of Science"))
            .unwrap();
        assert!(msc < ta);
    }

    #[test]
    fn display_years() {
        assert_eq!(display_year("Present"), "Now");
        assert_eq!(display_year("2019-2023"), "2023");
        assert_eq!(display_year("2024"), "2024");
    }
}
