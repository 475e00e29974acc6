use super::{Metric, Project};

pub static PROJECTS: &[Project] = &[
    Project {
        id: "neobank-platform",
        category: "FinTech",
        title: "NeoBank Digital Banking Platform",
        client: "FinanceFirst Corporation",
        description: "A cloud-native retail banking platform that replaced a thirty-year-old core system, giving customers instant account opening, real-time payments and a unified mobile experience.",
        challenge: "FinanceFirst ran on a batch-oriented mainframe that settled transactions overnight. New features took quarters to ship and mobile adoption had stalled below 20%.",
        solution: "We carved the core into event-driven services behind a strangler facade, migrated accounts in waves with zero downtime, and shipped a new mobile app on top of a real-time ledger.",
        results: "User adoption grew 300% in the first year, settlement moved from overnight to seconds, and the release cadence went from quarterly to weekly.",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=1080&fit=crop",
        metrics: &[
            Metric { icon: "users", value: "2.4M", label: "Active Customers" },
            Metric { icon: "trending", value: "300%", label: "Adoption Growth" },
            Metric { icon: "award", value: "99.99%", label: "Platform Uptime" },
        ],
        technologies: &["Rust", "Kafka", "PostgreSQL", "Kubernetes", "React Native", "Terraform", "gRPC"],
        features: &[
            "Instant digital onboarding with KYC checks",
            "Real-time ledger and payment rails",
            "Card controls and spending insights",
            "Open banking APIs for partners",
        ],
    },
    Project {
        id: "payflow-gateway",
        category: "FinTech",
        title: "PayFlow Payment Gateway",
        client: "PayFlow Inc.",
        description: "A multi-currency payment gateway for marketplaces, with smart routing across acquirers and built-in fraud scoring.",
        challenge: "PayFlow's approval rates lagged competitors and chargebacks were eating into margins in new markets.",
        solution: "We built an acquirer-agnostic routing layer that scores every transaction and retries soft declines on the best-performing route.",
        results: "Approval rates rose by 11 points and fraud losses dropped by half within two quarters.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=1080&fit=crop",
        metrics: &[
            Metric { icon: "trending", value: "+11pts", label: "Approval Rate" },
            Metric { icon: "award", value: "50%", label: "Less Fraud Loss" },
            Metric { icon: "users", value: "40K", label: "Merchants" },
        ],
        technologies: &["Go", "Redis", "PostgreSQL", "Python", "AWS"],
        features: &[
            "Smart acquirer routing",
            "Machine-learned fraud scoring",
            "Multi-currency settlement",
            "Merchant analytics dashboard",
        ],
    },
    Project {
        id: "telehealth-connect",
        category: "Healthcare",
        title: "TeleHealth Connect",
        client: "MediCare Health Systems",
        description: "A telemedicine platform connecting patients with clinicians through secure video visits, e-prescriptions and remote monitoring.",
        challenge: "Rural patients faced long travel times for routine follow-ups and the existing portal could not meet privacy requirements for video care.",
        solution: "We delivered an end-to-end encrypted visit platform integrated with the hospital's records system, plus a device hub for home vitals.",
        results: "Patient satisfaction scores climbed 42% and follow-up no-shows fell by a third.",
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=1080&fit=crop",
        metrics: &[
            Metric { icon: "users", value: "500K", label: "Patients Served" },
            Metric { icon: "trending", value: "42%", label: "Satisfaction Lift" },
            Metric { icon: "award", value: "HIPAA", label: "Compliant" },
        ],
        technologies: &["TypeScript", "WebRTC", "FHIR", "Node.js", "Azure", "Flutter"],
        features: &[
            "Encrypted video consultations",
            "E-prescriptions and pharmacy routing",
            "Remote vitals monitoring",
            "Clinician scheduling and triage",
        ],
    },
    Project {
        id: "shopsphere-commerce",
        category: "E-Commerce",
        title: "ShopSphere Commerce Engine",
        client: "RetailMax International",
        description: "A headless commerce platform with AI-powered recommendations built to survive peak-season traffic.",
        challenge: "RetailMax's monolith buckled every Black Friday and personalization was limited to hand-curated bundles.",
        solution: "We moved the storefront to an edge-rendered headless architecture and added a real-time recommendation service trained on browsing signals.",
        results: "The platform handled 10M+ concurrent users during peak and recommendations increased average order value by 28%.",
        image: "https://images.unsplash.com/photo-1556740738-b6a63e27c4df?w=1080&fit=crop",
        metrics: &[
            Metric { icon: "users", value: "10M+", label: "Concurrent Users" },
            Metric { icon: "trending", value: "28%", label: "Higher Order Value" },
            Metric { icon: "award", value: "0", label: "Peak Outages" },
        ],
        technologies: &["Next.js", "GraphQL", "Elasticsearch", "Python", "Cloudflare Workers", "Redis"],
        features: &[
            "Headless storefront at the edge",
            "Personalized recommendations",
            "Unified inventory across channels",
            "One-click checkout",
        ],
    },
    Project {
        id: "assist-ai",
        category: "Artificial Intelligence",
        title: "AssistAI Support Copilot",
        client: "TechCorp Solutions",
        description: "A conversational assistant that resolves common support requests and drafts answers for human agents.",
        challenge: "Support volume doubled in a year while response times and costs kept climbing.",
        solution: "We trained an NLP pipeline on historical tickets, wired it into the help desk and kept humans in the loop for anything uncertain.",
        results: "Customer support costs fell 60% while satisfaction improved.",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=1080&fit=crop",
        metrics: &[
            Metric { icon: "trending", value: "60%", label: "Cost Reduction" },
            Metric { icon: "users", value: "1.2M", label: "Conversations" },
            Metric { icon: "award", value: "4.8/5", label: "CSAT" },
        ],
        technologies: &["Python", "PyTorch", "LangChain", "FastAPI", "Vector DB"],
        features: &[
            "Intent detection and routing",
            "Agent answer drafting",
            "Knowledge base retrieval",
            "Continuous feedback training",
        ],
    },
    Project {
        id: "smartcity-grid",
        category: "IoT & Smart Cities",
        title: "SmartCity Infrastructure Grid",
        client: "Municipal Infrastructure Group",
        description: "An IoT platform that monitors street lighting, traffic and utilities across a metropolitan area from a single operations center.",
        challenge: "City systems were siloed, energy costs were rising and emergency crews lacked live situational data.",
        solution: "We deployed a sensor mesh with edge gateways and a central digital twin that drives adaptive lighting and dispatch.",
        results: "The city achieved 35% energy savings and dramatically improved emergency response times.",
        image: "https://images.unsplash.com/photo-1480714378408-67cf0d13bc1b?w=1080&fit=crop",
        metrics: &[
            Metric { icon: "trending", value: "35%", label: "Energy Savings" },
            Metric { icon: "users", value: "3M", label: "Residents Served" },
            Metric { icon: "award", value: "120K", label: "Connected Sensors" },
        ],
        technologies: &["Rust", "MQTT", "TimescaleDB", "Grafana", "LoRaWAN", "Kubernetes"],
        features: &[
            "Adaptive street lighting",
            "Live traffic flow analytics",
            "Utility leak detection",
            "Emergency dispatch integration",
        ],
    },
    Project {
        id: "learnloop",
        category: "Education",
        title: "LearnLoop Adaptive Learning",
        client: "BrightPath Academies",
        description: "An adaptive learning platform that personalizes lessons and gives teachers real-time insight into each student's progress.",
        challenge: "Teachers managed large classes with one-size-fits-all material and no early warning for struggling students.",
        solution: "We built mastery-based lesson paths with an analytics layer that flags gaps as they appear.",
        results: "Course completion rose 45% and teachers reclaimed hours each week previously spent grading.",
        image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=1080&fit=crop",
        metrics: &[
            Metric { icon: "users", value: "250K", label: "Students" },
            Metric { icon: "trending", value: "45%", label: "Completion Lift" },
            Metric { icon: "award", value: "12", label: "Districts" },
        ],
        technologies: &["Elixir", "Phoenix LiveView", "PostgreSQL", "Python"],
        features: &[
            "Mastery-based lesson paths",
            "Early-warning analytics",
            "Automated grading",
            "Parent progress reports",
        ],
    },
    Project {
        id: "routewise-logistics",
        category: "Logistics",
        title: "RouteWise Fleet Optimizer",
        client: "GlobalFreight Partners",
        description: "A fleet and route optimization suite that plans deliveries across regions and replans in real time as conditions change.",
        challenge: "Dispatchers planned routes by hand, trucks ran half empty and late deliveries triggered contract penalties.",
        solution: "We combined live telematics with a constraint solver that balances load, time windows and driver hours.",
        results: "Fuel spend dropped 22% and on-time delivery reached 97%.",
        image: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=1080&fit=crop",
        metrics: &[
            Metric { icon: "trending", value: "22%", label: "Fuel Savings" },
            Metric { icon: "award", value: "97%", label: "On-Time Delivery" },
            Metric { icon: "users", value: "8K", label: "Vehicles" },
        ],
        technologies: &["Rust", "OR-Tools", "Kafka", "React", "PostGIS", "AWS", "Docker"],
        features: &[
            "Constraint-based route planning",
            "Live telematics tracking",
            "Load balancing across depots",
            "Driver hours compliance",
        ],
    },
];
