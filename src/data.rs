//! Portfolio content. Everything here is literal and read-only.

#[derive(Debug, Clone)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub title: String,
    pub items: String,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub focus: String,
    pub summary: String,
    pub links: Vec<Link>,
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    pub abstract_text: String,
    pub metrics: Vec<Metric>,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Volunteering {
    pub role: String,
    pub organisation: String,
    pub period: String,
    /// (heading, text) pairs such as ("Impact", "...").
    pub notes: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    /// Markdown.
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
    pub experience: Vec<Experience>,
    pub volunteering: Vec<Volunteering>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<String>,
    pub posts: Vec<BlogPost>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_string()).collect()
}

impl Portfolio {
    pub fn new() -> Self {
        let link = |label: &str, url: &str| Link {
            label: label.into(),
            url: url.into(),
        };
        let skill = |title: &str, items: &str| SkillGroup {
            title: title.into(),
            items: items.into(),
        };

        let profile = Profile {
            name: "Vallari Ashar".into(),
            headline: "B.Tech CSE Student @ VIT Chennai".into(),
            focus: "Specializing in AI and Robotics".into(),
            summary: "Computer Science Engineering student specializing in AI and Robotics with \
                      expertise in autonomous systems and FPGA development. Led robotics teams to \
                      1st place nationally in DD ROBOCON 2025 and top-20 internationally. \
                      Professional experience in mission-critical embedded systems at DRDO for \
                      fighter aircraft."
                .into(),
            links: vec![
                link("Email", "mailto:vallari.ashar13@gmail.com"),
                link("LinkedIn", "https://www.linkedin.com/in/vallari1/"),
                link("GitHub", "https://github.com/vallari1"),
            ],
            skills: vec![
                skill(
                    "Programming Languages",
                    "Python, C/C++, SQL, JavaScript, HTML/CSS, VHDL",
                ),
                skill("Frameworks & Tools", "ROS, Git, Docker, VS Code, AMD VIVADO"),
                skill("Simulation & CAD", "Gazebo, Isaac Sim, MATLAB, SolidWorks"),
            ],
        };

        let project = |title: &str, description: &str, t: &[&str], date: &str| Project {
            title: title.into(),
            description: description.into(),
            tags: tags(t),
            date: date.into(),
        };

        let projects = vec![
            project(
                "Basketball Robots",
                "Use basket tracking, localization and internal co-ordination. Have shooting \
                 mechanism, extension mechanism, and many others. Powered by STM32, and Jetson Nano.",
                &["STM32", "Jetson Development Kit", "SolidWorks", "ROS2", "Gazebo"],
                "Jan - May 2025",
            ),
            project(
                "KIA - Open-source Robotic Arm",
                "Developed an open source robotic arm with bluetooth control and autonomous \
                 hand-shaking capabilities using computer vision. Visualized through MoveIt2 in \
                 Gazebo for smooth communication and movements.",
                &["Arduino", "RaspberryPi", "SolidWorks", "MoveIt2", "Gazebo"],
                "June 2024",
            ),
            project(
                "Karan - Autonomous Ball Tracking Robot",
                "Autonomous ball tracking, receiving and dropping robot with image processing \
                 capabilities and great speed and accuracy for the ROBOCON 2024 problem statement.",
                &["OpenCV", "ROS", "Arduino", "Computer Vision"],
                "2024",
            ),
            project(
                "Arjun - Ball Collecting Robot",
                "Joystick-controlled ball collecting and launching robot, with grippers and \
                 linear actuators for sapling pick up as per the ROBOCON 2024 problem statement.",
                &["ROS2", "Embedded Systems", "Mechanical Design"],
                "2024",
            ),
            project(
                "VITrace - Lost Item Tracking App",
                "Full stack Lost Item Tracing application that won Top 5 among 164 teams in \
                 Solve-a-thon 2024. Selected for implementation across VIT campuses.",
                &["React Native", "PostgreSQL", "ResNet18", "Full Stack"],
                "April 2024",
            ),
            project(
                "Autonomous Crop Disease Detection Robot",
                "Built an autonomous robot for field mapping and real-time crop disease detection \
                 using YOLO and ROS2, simulated in Gazebo with Ackermann-style navigation.",
                &["Python", "C++", "YOLOv8", "OpenCV", "ROS2", "NAV2"],
                "2023",
            ),
        ];

        let metric = |value: &str, label: &str| Metric {
            value: value.into(),
            label: label.into(),
        };

        let publications = vec![
            Publication {
                title: "Quantum-Enhanced Spiking Neural Networks for Closed-Loop Neuromodulation \
                        Systems"
                    .into(),
                venue: "International Conference on Innovative Computing, Intelligent \
                        Communication and Smart Electrical Systems (ICSES-2024)"
                    .into(),
                abstract_text: "A theoretically advanced framework where input through quantum \
                                dot sensors from brain neurons is converted to spike-based data, \
                                which is then treated as an input layer in QESNN. The output of \
                                the neural network creates a closed-loop neuromodulation circuit, \
                                utilizing deep brain stimulation."
                    .into(),
                metrics: Vec::new(),
                date: "October 2024".into(),
            },
            Publication {
                title: "A Portable Welding Inspection System & Method for Detecting Structural \
                        Defects"
                    .into(),
                venue: "IP Application Number: 202441097583".into(),
                abstract_text: "Developed an innovative portable welding inspection system \
                                integrating high-end cameras and ultrasonic sensors. Created a \
                                multi-modal transformer for optimized ultrasonic signal \
                                processing with 95% accuracy in detecting surface and subsurface \
                                welding defects, operational latency under 50ms, and 60 FPS at \
                                4K resolution."
                    .into(),
                metrics: vec![
                    metric("95%", "Accuracy"),
                    metric("<50ms", "Latency"),
                    metric("60 FPS", "4K Resolution"),
                    metric("0.5-20 MHz", "Frequency Range"),
                ],
                date: "October 2024".into(),
            },
        ];

        let experience = vec![
            Experience {
                title: "Project Intern".into(),
                company: "CASDIC, DRDO".into(),
                location: "Bengaluru, KA".into(),
                period: "May 2025 – July 2025".into(),
                highlights: tags(&[
                    "Worked on verification and validation of mission-critical embedded systems \
                     for next-generation fighter aircraft including Su-30 MKI upgrade programs",
                    "Performed functional testing and diagnostics of flight control software on \
                     Xilinx Kintex-7 FPGA development boards using VHDL-based simulation and \
                     debugging tools",
                    "Gained hands-on experience with avionics protocols, real-time signal \
                     processing, and hardware-in-the-loop (HIL) testing environments",
                    "Collaborated with DRDO scientists on integration workflows for combat \
                     systems, contributing to performance validation under real-time constraints",
                ]),
            },
            Experience {
                title: "Team Captain".into(),
                company: "Technocrats Robotics".into(),
                location: "Chennai, TN".into(),
                period: "August 2024 – Present".into(),
                highlights: tags(&[
                    "Leading a self-funded team to national and international competitions, \
                     including the development of basketball playing robots for DD ROBOCON",
                    "Scored 100/100 in DD ROBOCON STAGE 1 2025, and secured 1st position among \
                     84 national teams",
                    "Achieved 20th place among 100+ participants at International Rover \
                     Challenge 2025 with our Mars exploration rover, Abhimanyu",
                ]),
            },
            Experience {
                title: "Robotics Research Intern".into(),
                company: "ACK Robotics".into(),
                location: "Chennai, TN".into(),
                period: "Oct 2023 – April 2024".into(),
                highlights: tags(&[
                    "Developed an Ackermann-style robot controlled by ROS2, utilizing the NAV2 \
                     stack, GPS, and Fields2Cover library to simulate field mapping and \
                     navigation in Gazebo",
                    "Gained proficiency in navigation, mapping, and SLAM in ROS, achieving 90%+ \
                     navigation success rate in Gazebo simulation",
                    "Implemented YOLOv8 and ResNet101 for detecting PCB anomalies, defects, and \
                     textureless industrial metal objects",
                    "Acquired skills in documentation, development, and deployment of robotic \
                     software in a professional setting",
                ]),
            },
        ];

        let note = |heading: &str, text: &str| (heading.to_string(), text.to_string());
        let volunteering = vec![
            Volunteering {
                role: "Volunteer Teacher".into(),
                organisation: "E-Vidyaloka, Bishunpur, JK".into(),
                period: "Jan 2024 - Mar 2024".into(),
                notes: vec![
                    note(
                        "Impact",
                        "Taught Mathematics to underprivileged 8th grade students in Jharkhand \
                         remotely, impacting 80-90 students",
                    ),
                    note(
                        "Collaboration",
                        "Collaborated with government school officials to facilitate a smooth \
                         transition to online learning",
                    ),
                    note(
                        "Mission",
                        "Contributed to bridging the digital education gap for underserved \
                         communities in rural India",
                    ),
                ],
            },
            Volunteering {
                role: "Speaker".into(),
                organisation: "Empower Tech 2024".into(),
                period: "3rd October 2023".into(),
                notes: vec![
                    note(
                        "Impact",
                        "Invited to talk about robotics as a career, and the basics of how to \
                         approach the field as a beginner",
                    ),
                    note(
                        "Collaboration",
                        "Judged the hackathon and ideathon phase of the workshop",
                    ),
                ],
            },
        ];

        let achievement = |title: &str, description: &str| Achievement {
            title: title.into(),
            description: description.into(),
        };
        let achievements = vec![
            achievement(
                "DD ROBOCON 2025 Nationals",
                "Competed with the best teams from all over India @ IIT DELHI",
            ),
            achievement(
                "DD ROBOCON 2025 Stage 1 - 1st Position",
                "Scored 100/100 and secured 1st position out of 84 teams all over India in Stage 1",
            ),
            achievement(
                "International Rover Challenge - Top 20",
                "Among the top 20 teams from the 100+ registrations at BITS Goa with our Mars \
                 exploration rover",
            ),
            achievement(
                "DD ROBOCON Nationals 2024",
                "Advanced to nationals, competing with 100+ teams from across India",
            ),
            achievement(
                "Top 5 in Solve-a-thon 2024",
                "VITrace project selected for implementation across VIT campuses among 164 teams",
            ),
        ];

        let certifications = tags(&[
            "Machine Learning Specialization - DeepLearning.AI (Stanford Online, Andrew Ng)",
            "Foundations of Cybersecurity - Google",
            "Summer Analytics for Data Science - IIT Delhi",
        ]);

        let posts = vec![
            BlogPost {
                id: 1,
                title: "Quantum Neural Networks: The Future of AI".into(),
                excerpt: "Exploring the intersection of quantum computing and artificial \
                          intelligence..."
                    .into(),
                date: "November 15, 2024".into(),
                read_time: "5 min read".into(),
                tags: tags(&["Quantum Computing", "AI", "Research"]),
                body: "# Quantum Neural Networks: The Future of AI\n\n\
                       In the rapidly evolving landscape of artificial intelligence, quantum \
                       neural networks represent a groundbreaking frontier that promises to \
                       revolutionize computational capabilities...\n\n\
                       ## Key Insights\n\n\
                       - Quantum computers can process complex neural network computations \
                       exponentially faster\n\
                       - Quantum entanglement allows for more sophisticated machine learning \
                       models\n\
                       - Current challenges include quantum decoherence and scalability\n\n\
                       Stay tuned for a deep dive into this exciting technological convergence!\n"
                    .into(),
            },
            BlogPost {
                id: 2,
                title: "ROS2: Building Autonomous Robotics Systems".into(),
                excerpt: "A comprehensive guide to developing robust robotic applications using \
                          ROS2..."
                    .into(),
                date: "October 20, 2024".into(),
                read_time: "7 min read".into(),
                tags: tags(&["Robotics", "ROS2", "Software Development"]),
                body: "# ROS2: Revolutionizing Autonomous Robotics\n\n\
                       Robot Operating System 2 (ROS2) has emerged as a game-changing framework \
                       for building sophisticated autonomous robotic systems...\n\n\
                       ## Core Advantages of ROS2\n\n\
                       - Improved security model\n\
                       - Real-time communication capabilities\n\
                       - Enhanced cross-platform support\n\
                       - Robust distributed computing architecture\n\n\
                       Dive into the world of modern robotics software engineering!\n"
                    .into(),
            },
            BlogPost {
                id: 3,
                title: "AI in Agriculture: Beyond Traditional Farming".into(),
                excerpt: "How artificial intelligence is transforming agricultural practices and \
                          sustainability..."
                    .into(),
                date: "September 5, 2024".into(),
                read_time: "6 min read".into(),
                tags: tags(&["AI", "Agriculture", "Sustainability"]),
                body: "# AI: The New Frontier in Agricultural Innovation\n\n\
                       Artificial intelligence is reshaping agriculture, offering unprecedented \
                       insights and optimization strategies...\n\n\
                       ## Transformative AI Applications\n\n\
                       - Precision crop monitoring\n\
                       - Automated disease detection\n\
                       - Predictive yield optimization\n\
                       - Sustainable resource management\n\n\
                       The future of farming is **intelligent**, data-driven, and sustainable!\n"
                    .into(),
            },
        ];

        Self {
            profile,
            projects,
            publications,
            experience,
            volunteering,
            achievements,
            certifications,
            posts,
        }
    }
}
