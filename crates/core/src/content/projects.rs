#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Cobalt: Scalable Teleoperation",
        category: "Robotics/AI",
        description: "Masters Thesis. Developed a teleoperation platform to democratize robot learning at scale using vectorized environments and load-balanced infrastructure.",
        tech_stack: &["Python", "Simulation", "GPU", "Robotics"],
        link: Some("https://cobalt-teleop.github.io/"),
    },
    Project {
        id: 2,
        title: "Efficient Backdoor Unlearning",
        category: "LLM Security",
        description: "Explored early-stage detection and removal of backdoors in LMs utilizing SPECTRE's robust covariance estimation.",
        tech_stack: &["Python", "PyTorch", "LLMs", "Security"],
        link: None,
    },
    Project {
        id: 3,
        title: "Zero-Shot Adaptation Policy",
        category: "Robotics/AI",
        description: "Combined diffusion-based trajectory planners with LLM-generated loss functions for zero-shot policy adaptation in MetaWorld.",
        tech_stack: &["Python", "Diffusion Models", "LLMs", "Reinforcement Learning"],
        link: None,
    },
    Project {
        id: 4,
        title: "Efficient-Selection-via-Pruning",
        category: "ML Efficiency",
        description: "Novel data selection approach using model pruning and quantization for active learning, achieving 1.2-2x speed-up.",
        tech_stack: &["Python", "PyTorch", "Pruning", "Quantization"],
        link: None,
    },
    Project {
        id: 5,
        title: "Deep RL in 3D Connect 4",
        category: "Reinforcement Learning",
        description: "Investigated DQN, Actor-Critic, and PPO via self-play, consistently outperforming Minimax agents.",
        tech_stack: &["Python", "PyTorch", "DQN", "PPO"],
        link: None,
    },
    Project {
        id: 6,
        title: "Historical Document Restoration",
        category: "Computer Vision",
        description: "Trained Pix2Pix GAN to reconstruct damaged documents and fine-tuned TrOCR for improved OCR accuracy.",
        tech_stack: &["Python", "GANs", "Pix2Pix", "TrOCR"],
        link: None,
    },
];
