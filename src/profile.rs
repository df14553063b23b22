//! Static content for the about page.

pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

pub static MILESTONES: [Milestone; 5] = [
    Milestone {
        year: 2019,
        title: "Start of Bachelor's Degree",
        description: "Embarked on a new journey in tech",
        bullets: &[
            "Bachelor of Technology (B. Tech) in Information Technology at NSUT, one of India's top 10 CS universities, awarded the DASA CIWG Scholarship.",
            "Extensive research focus in Distributed Systems, Blockchain and Machine Learning, authoring 7 research articles.",
            "Completed 3 internships, published 4 research papers and presented at 1 local conference.",
        ],
    },
    Milestone {
        year: 2022,
        title: "First Research Internship",
        description: "MITACS Globalink Visiting Research Scholar at the University of Victoria",
        bullets: &[
            "A Canadian government sponsored program under Dr. Jianping Pan of PANLAB at UVic.",
            "Proposed a novel quantitative WAN-based blockchain framework after interviewing blockchain startup CEOs worldwide.",
            "Presented findings at Canadian and Chinese networking labs to 50+ postdocs and industry researchers.",
        ],
    },
    Milestone {
        year: 2023,
        title: "First Startup Experience",
        description: "First step into the industry handling a variety of technical tasks",
        bullets: &[
            "Worked under the CEO at Cypherock, contributing to startup growth and $1 million in funding.",
            "Identified and addressed vulnerabilities in hardware crypto wallets.",
            "Authored technical articles boosting page visits by 460% and average visit duration by 2000%.",
        ],
    },
    Milestone {
        year: 2023,
        title: "Started Master's Degree",
        description: "The American Dream",
        bullets: &[
            "A deeper dive into Computer Science at Georgia Tech, specializing in Computing Systems.",
            "Teaching experience and coursework in economics, business and languages.",
        ],
    },
    Milestone {
        year: 2024,
        title: "Summer Internship at a tech startup",
        description: "Start of a professional career as a Software Engineer",
        bullets: &[
            "Lead Developer for a Gen-AI based Mixed Reality (AR/XR) OpenXR app to streamline manufacturing processes.",
            "Built a custom RAG pipeline on Neo4j, FastEmbed embeddings and FAISS/Pinecone indexing.",
            "Reduced training time by 37% and training costs by 40% while boosting worker efficiency by 25%.",
            "Mentored high school and college interns in software development and research practices.",
        ],
    },
];

pub struct Degree {
    pub university: &'static str,
    pub degree: &'static str,
    pub specialization: &'static str,
    pub location: &'static str,
    pub graduation: &'static str,
    /// Key courses, one slice per column. Empty when there's nothing to list.
    pub courses: &'static [&'static [&'static str]],
}

pub static EDUCATION: [Degree; 2] = [
    Degree {
        university: "Georgia Institute of Technology",
        degree: "Master of Science (MS) in Computer Science",
        specialization: "Specialization: Computing Systems",
        location: "Atlanta, GA, USA",
        graduation: "Expected: May 2025",
        courses: &[
            &[
                "Advanced Operating Systems",
                "Systems for Machine Learning",
                "Distributed Computing",
                "Cloud Infrastructure",
            ],
            &[
                "Deep Learning",
                "Computer Architecture",
                "Algorithms/Data Structures",
                "Cryptography",
            ],
            &["Database Management", "Networking"],
        ],
    },
    Degree {
        university: "Netaji Subhas University of Technology",
        degree: "Bachelor of Technology (B.Tech) in Information Technology",
        specialization: "Specialization: Network Computing and Security",
        location: "New Delhi, India",
        graduation: "May 2023",
        courses: &[],
    },
];

pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        category: "Languages",
        skills: &[
            "C", "C++", "C#", "Python", "Go", "JavaScript", "HTML", "CSS", "SQL", "Solidity",
        ],
    },
    SkillCategory {
        category: "Frameworks",
        skills: &[
            "React", "Bootstrap", "Nodejs", "Expressjs", "jQuery", "gRPC", "OpenMP", "MPI",
            "TensorFlow", "PyTorch", "Web3",
        ],
    },
    SkillCategory {
        category: "Environments",
        skills: &[
            "Git", "Docker", "Kubernetes", "Linux", "Bash", "Shell", "Truffle", "Azure", "AWS",
            "Unity", "Jira", "Confluence", "Agile",
        ],
    },
    SkillCategory {
        category: "Development Tools",
        skills: &[
            "Wireshark", "Splunk", "Autopsy", "Neo4j", "Postman", "REST API", "PostgreSQL",
            "MongoDB", "AWS S3",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertStatus {
    InProgress,
    Issued {
        date: &'static str,
        credential_url: &'static str,
    },
}

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub status: CertStatus,
}

impl Certification {
    pub fn issued_label(&self) -> &'static str {
        match self.status {
            CertStatus::InProgress => "In Progress",
            CertStatus::Issued { date, .. } => date,
        }
    }

    /// Link to verify the credential; nothing to verify until it's issued.
    pub fn verify_url(&self) -> Option<&'static str> {
        match self.status {
            CertStatus::InProgress => None,
            CertStatus::Issued { credential_url, .. } => Some(credential_url),
        }
    }
}

pub static CERTIFICATIONS: [Certification; 6] = [
    Certification {
        title: "AWS Solutions Architect Associate",
        issuer: "Amazon Web Services",
        status: CertStatus::InProgress,
    },
    Certification {
        title: "Network Function Virtualization",
        issuer: "Georgia Institute of Technology",
        status: CertStatus::Issued {
            date: "May 2021",
            credential_url: "https://www.coursera.org/account/accomplishments/verify/JN38T6JM8N77",
        },
    },
    Certification {
        title: "Software Defined Networking",
        issuer: "Coursera",
        status: CertStatus::Issued {
            date: "Apr 2021",
            credential_url: "https://coursera.org/verify/UXDBXNKFAEYG",
        },
    },
    Certification {
        title: "Developing and Deploying an Internet of Things",
        issuer: "Amazon Web Services",
        status: CertStatus::Issued {
            date: "Aug 2021",
            credential_url: "https://coursera.org/share/76c7f67412f7fc8073e89f77bc9f8c87",
        },
    },
    Certification {
        title: "Intro to CyberSecurity L1",
        issuer: "CyberPeace Foundation",
        status: CertStatus::Issued {
            date: "Jul 2021",
            credential_url: "https://block.cyberpeace.org/docs/535d7e2149ab66493f67be7b09feb38093b6f2e725a15a7843451a74c6dcd4f5",
        },
    },
    Certification {
        title: "Data Structures Specialist",
        issuer: "Coding Ninjas",
        status: CertStatus::Issued {
            date: "May 2020",
            credential_url: "http://students.codingninjas.com/verify/42f4d8e4972155fb",
        },
    },
];

pub struct Hobby {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub static HOBBIES: [Hobby; 4] = [
    Hobby {
        name: "Soccer",
        icon: "⚽",
        description: "I play and watch soccer regularly",
        details: "I played competitively in high school, representing my school 3 times and captaining the U-17 squad that won the national event held in Jubail, Saudi Arabia. I've supported Liverpool every week since 2011.",
    },
    Hobby {
        name: "Software Projects",
        icon: "📚",
        description: "I love building unique software experiences",
        details: "I regularly dive into tech blogs to keep up with the industry and read scientific literature on AI and quantum computing, which often inspires new ideas for my projects.",
    },
    Hobby {
        name: "Traveling",
        icon: "📷",
        description: "My dream is to travel the world",
        details: "I love learning new languages and cultures through events, experiences and world travel.",
    },
    Hobby {
        name: "Video Games",
        icon: "♟️",
        description: "I paid for an expensive GPU, I will use it to its limit",
        details: "My childhood was FIFA, WWE and Uncharted on limited gaming time. Now I explore everything from competitive e-sports like Valorant and story-driven games like the Metal Gear series to RPGs like Elden Ring.",
    },
];

/// Which hobby card is blown up, if any. At most one is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HobbyFocus(Option<usize>);

impl HobbyFocus {
    /// Opens the card at `index`, replacing any other. Unknown cards close it.
    pub fn open(self, index: usize) -> Self {
        Self(HOBBIES.get(index).map(|_| index))
    }

    pub fn close(self) -> Self {
        Self(None)
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }

    pub fn hobby(self) -> Option<&'static Hobby> {
        self.0.and_then(|i| HOBBIES.get(i))
    }
}
