use folio_protocol::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutDay {
    pub day: &'static str,
    pub kind: &'static str,
    pub focus: &'static str,
    pub exercises: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HobbyDetail {
    Chess {
        links: &'static [(&'static str, &'static str)],
    },
    Building {
        projects: &'static [&'static str],
    },
    Reading {
        current: &'static str,
        last_read: &'static str,
    },
    Fitness {
        routine: &'static [WorkoutDay],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hobby {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: Color,
    pub detail: HobbyDetail,
}

pub const HOBBIES: &[Hobby] = &[
    Hobby {
        id: "chess",
        title: "Chess",
        description: "I enjoy deep strategy and tactical puzzles. Catch me on the board!",
        color: Color::from_rgb8(0xa8, 0x55, 0xf7),
        detail: HobbyDetail::Chess {
            links: &[
                ("Chess.com", "https://www.chess.com/member/aryansarswat"),
                ("Lichess", "https://lichess.org/@/IsMyYear2022"),
            ],
        },
    },
    Hobby {
        id: "building",
        title: "I love building random stuff",
        description: "Turning 'what if' into 'here it is'. I build quirky product experiments.",
        color: Color::from_rgb8(0x3b, 0x82, 0xf6),
        detail: HobbyDetail::Building {
            projects: &["Next Watch Recommender", "Next Apartment Finder"],
        },
    },
    Hobby {
        id: "reading",
        title: "Reading",
        description: "Exploring sci-fi universes and technical deep-dives.",
        color: Color::from_rgb8(0x10, 0xb9, 0x81),
        detail: HobbyDetail::Reading {
            current: "Children of Time",
            last_read: "Project Hail Mary",
        },
    },
    Hobby {
        id: "fitness",
        title: "Working Out",
        description: "Maintaining peak performance with a disciplined routine.",
        color: Color::from_rgb8(0xef, 0x44, 0x44),
        detail: HobbyDetail::Fitness {
            routine: &[
                WorkoutDay {
                    day: "Mon",
                    kind: "Push",
                    focus: "Chest & Shoulders",
                    exercises: &[
                        "Bench Press",
                        "Shoulder Press",
                        "Machine Chest Press",
                        "Lateral Raises",
                        "Tricep Pushdowns",
                    ],
                },
                WorkoutDay {
                    day: "Tue",
                    kind: "Run",
                    focus: "Cardio",
                    exercises: &["5KM Zone 2 Run"],
                },
                WorkoutDay {
                    day: "Wed",
                    kind: "Pull",
                    focus: "Back & Biceps",
                    exercises: &[
                        "Pullups",
                        "Reverse-grip barbell rows",
                        "Machine Rows",
                        "Machine bicep curls",
                        "Bayesian Bicep Curls",
                    ],
                },
                WorkoutDay {
                    day: "Thu",
                    kind: "Run",
                    focus: "Cardio",
                    exercises: &["5KM Zone 2 Run"],
                },
                WorkoutDay {
                    day: "Fri",
                    kind: "Legs",
                    focus: "Legs",
                    exercises: &["Deadlifts", "Squats", "Leg Curls", "Leg Extensions"],
                },
            ],
        },
    },
];

/// The routine of the fitness hobby, for the day-tab view.
pub fn fitness_routine() -> &'static [WorkoutDay] {
    HOBBIES
        .iter()
        .find_map(|h| match h.detail {
            HobbyDetail::Fitness { routine } => Some(routine),
            _ => None,
        })
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitness_routine_covers_weekdays() {
        let routine = fitness_routine();
        assert_eq!(routine.len(), 5);
        assert_eq!(routine[0].day, "Mon");
        assert!(routine.iter().all(|d| !d.exercises.is_empty()));
    }
}
