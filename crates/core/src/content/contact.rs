use folio_protocol::Color;

/// One node of the contact diagram. `dx`/`dy` are offsets from the
/// diagram center in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactNode {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub color: Color,
    pub dx: f64,
    pub dy: f64,
}

pub const CONTACT_NODES: &[ContactNode] = &[
    ContactNode {
        id: "resume",
        label: "Download",
        value: "Resume.pdf",
        href: "/aryan/resume.pdf",
        color: Color::from_rgb8(0xa8, 0x55, 0xf7),
        dx: 0.0,
        dy: -120.0,
    },
    ContactNode {
        id: "email",
        label: "Email",
        value: "aryansarswat2000@gmail.com",
        href: "mailto:aryansarswat2000@gmail.com",
        color: Color::from_rgb8(0xEA, 0x43, 0x35),
        dx: -120.0,
        dy: 0.0,
    },
    ContactNode {
        id: "linkedin",
        label: "LinkedIn",
        value: "aryan-sarswat",
        href: "https://linkedin.com/in/aryan-sarswat",
        color: Color::from_rgb8(0x0A, 0x66, 0xC2),
        dx: 120.0,
        dy: 0.0,
    },
    ContactNode {
        id: "github",
        label: "GitHub",
        value: "AryanSarswat",
        href: "https://github.com/AryanSarswat",
        color: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        dx: 0.0,
        dy: 120.0,
    },
];

/// Diagram edges as index pairs into [`CONTACT_NODES`], in draw order;
/// the enter animation staggers along this order.
pub const CONNECTIONS: &[(usize, usize)] = &[
    (0, 1), // resume — email
    (1, 3), // email — github
    (3, 2), // github — linkedin
    (2, 0), // linkedin — resume
    (1, 2), // email — linkedin
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connections_index_in_bounds() {
        for &(a, b) in CONNECTIONS {
            assert!(a < CONTACT_NODES.len());
            assert!(b < CONTACT_NODES.len());
            assert_ne!(a, b);
        }
    }
}
