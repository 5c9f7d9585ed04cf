//! Built-in ten-scenario sample set shown by the gallery.

use super::types::{Category, Difficulty, Scenario, Step};

struct Seed {
    id: u32,
    title: &'static str,
    category: Category,
    difficulty: Difficulty,
    duration: &'static str,
    rating: f64,
    usage: &'static str,
    image: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    benefits: &'static [&'static str],
    audio_description: &'static str,
    steps: &'static [(&'static str, &'static str)],
}

impl From<&Seed> for Scenario {
    fn from(seed: &Seed) -> Self {
        Scenario {
            id: seed.id,
            title: seed.title.to_string(),
            category: seed.category,
            difficulty: seed.difficulty,
            duration: seed.duration.to_string(),
            rating: seed.rating,
            usage: seed.usage.to_string(),
            image: seed.image.to_string(),
            description: seed.description.to_string(),
            features: seed.features.iter().map(|f| f.to_string()).collect(),
            benefits: seed.benefits.iter().map(|b| b.to_string()).collect(),
            audio_description: seed.audio_description.to_string(),
            steps: seed
                .steps
                .iter()
                .map(|(title, description)| Step {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        }
    }
}

/// The sample scenarios, in catalog order
pub fn builtin_scenarios() -> Vec<Scenario> {
    SEEDS.iter().map(Scenario::from).collect()
}

const SEEDS: [Seed; 10] = [
    Seed {
        id: 1,
        title: "Medicine Reading & Identification",
        category: Category::Healthcare,
        difficulty: Difficulty::Easy,
        duration: "2-3 min",
        rating: 4.8,
        usage: "15,000+",
        image: "https://images.pexels.com/photos/3683074/pexels-photo-3683074.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Learn how VISIONX smart glasses help visually impaired users safely identify medications, read prescription labels, and understand dosage instructions through advanced OCR and AI-powered text recognition.",
        features: &[
            "OCR text recognition",
            "Medicine identification",
            "Dosage reading",
            "Safety warnings",
            "Audio instructions",
        ],
        benefits: &[
            "Medication safety",
            "Independent healthcare management",
            "Reduced medication errors",
        ],
        audio_description: "This scenario demonstrates how the smart glasses scan and read medicine labels, providing clear audio feedback about medication names, dosages, and important safety information.",
        steps: &[
            ("Position glasses towards medicine bottle", "The AI camera automatically detects and focuses on the medication label for optimal reading."),
            ("OCR processing and text extraction", "Advanced optical character recognition processes the label text and identifies key information."),
            ("Audio feedback delivery", "Clear audio narration provides medication name, dosage, and important safety warnings."),
        ],
    },
    Seed {
        id: 2,
        title: "Grocery Shopping Assistant",
        category: Category::Shopping,
        difficulty: Difficulty::Medium,
        duration: "5-7 min",
        rating: 4.7,
        usage: "22,000+",
        image: "https://images.pexels.com/photos/264636/pexels-photo-264636.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Experience how VISIONX transforms grocery shopping by identifying products, reading prices, checking expiration dates, and providing nutritional information through computer vision and barcode scanning.",
        features: &[
            "Product identification",
            "Price reading",
            "Barcode scanning",
            "Expiration date check",
            "Nutritional info",
        ],
        benefits: &["Independent shopping", "Better product choices", "Time efficiency"],
        audio_description: "This demonstration shows how users can navigate grocery stores independently, with the glasses providing real-time information about products, prices, and nutritional details.",
        steps: &[
            ("Product scanning and identification", "The glasses identify products through visual recognition and barcode scanning."),
            ("Price and information extraction", "AI processes price tags and product labels to extract relevant information."),
            ("Audio guidance and feedback", "Users receive clear audio descriptions of products, prices, and recommendations."),
        ],
    },
    Seed {
        id: 3,
        title: "Face Recognition & Social Interaction",
        category: Category::Social,
        difficulty: Difficulty::Hard,
        duration: "4-6 min",
        rating: 4.9,
        usage: "18,500+",
        image: "https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Discover how VISIONX enables meaningful social connections by recognizing familiar faces, providing contextual information about people, and facilitating natural conversations in social settings.",
        features: &[
            "Facial recognition",
            "Person identification",
            "Social context",
            "Conversation aids",
            "Privacy protection",
        ],
        benefits: &[
            "Enhanced social interaction",
            "Improved relationships",
            "Increased confidence",
        ],
        audio_description: "This scenario demonstrates the face recognition capabilities that help users identify friends, family, and colleagues in various social situations.",
        steps: &[
            ("Face detection and analysis", "The system detects faces in the user's field of view and analyzes facial features."),
            ("Identity matching and verification", "AI matches detected faces with stored profiles while maintaining privacy."),
            ("Contextual information delivery", "Users receive discreet audio information about identified individuals."),
        ],
    },
    Seed {
        id: 4,
        title: "Safe Road Crossing Navigation",
        category: Category::Safety,
        difficulty: Difficulty::Hard,
        duration: "3-5 min",
        rating: 4.6,
        usage: "25,000+",
        image: "https://images.pexels.com/photos/1007025/pexels-photo-1007025.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Learn how VISIONX enhances pedestrian safety by detecting traffic signals, identifying vehicles, monitoring crosswalk status, and providing real-time navigation guidance for safe street crossing.",
        features: &[
            "Traffic light detection",
            "Vehicle identification",
            "Crosswalk recognition",
            "Audio navigation",
            "Hazard alerts",
        ],
        benefits: &["Enhanced safety", "Independent mobility", "Reduced accidents"],
        audio_description: "This demonstration shows how the glasses provide crucial safety information for crossing streets, including traffic light status and vehicle detection.",
        steps: &[
            ("Traffic environment analysis", "The system analyzes the traffic environment, detecting lights, vehicles, and pedestrian signals."),
            ("Safety assessment and timing", "AI evaluates the safety of crossing based on traffic patterns and signal status."),
            ("Navigation guidance delivery", "Users receive clear audio instructions for safe crossing with timing information."),
        ],
    },
    Seed {
        id: 5,
        title: "Public Transport Navigation",
        category: Category::Transportation,
        difficulty: Difficulty::Medium,
        duration: "6-8 min",
        rating: 4.5,
        usage: "19,200+",
        image: "https://images.pexels.com/photos/1756957/pexels-photo-1756957.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Explore how VISIONX simplifies public transportation by reading bus numbers, identifying stops, providing schedule information, and guiding users through transit systems with confidence.",
        features: &[
            "Bus number recognition",
            "Stop identification",
            "Schedule reading",
            "Route guidance",
            "Platform navigation",
        ],
        benefits: &["Independent travel", "Reduced anxiety", "Better mobility"],
        audio_description: "This scenario demonstrates how users can navigate public transportation systems independently with real-time information about buses, trains, and stops.",
        steps: &[
            ("Transport identification", "The glasses identify approaching buses, trains, and their route numbers."),
            ("Schedule and route processing", "AI processes schedule information and provides route guidance."),
            ("Navigation assistance", "Users receive step-by-step audio guidance for boarding and navigation."),
        ],
    },
    Seed {
        id: 6,
        title: "Educational Text Reading",
        category: Category::Education,
        difficulty: Difficulty::Easy,
        duration: "3-4 min",
        rating: 4.7,
        usage: "12,800+",
        image: "https://images.pexels.com/photos/159711/books-bookstore-book-reading-159711.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Discover how VISIONX transforms learning by reading books, documents, and educational materials aloud with natural speech synthesis and intelligent text processing.",
        features: &[
            "Text recognition",
            "Document scanning",
            "Natural speech",
            "Reading speed control",
            "Bookmark features",
        ],
        benefits: &["Access to education", "Independent learning", "Improved literacy"],
        audio_description: "This demonstration shows how students and learners can access written educational content through advanced text-to-speech technology.",
        steps: &[
            ("Document detection and alignment", "The system detects and properly aligns with text documents for optimal reading."),
            ("Text extraction and processing", "Advanced OCR extracts text while maintaining formatting and structure."),
            ("Natural speech synthesis", "High-quality text-to-speech converts written content to natural audio."),
        ],
    },
    Seed {
        id: 7,
        title: "Kitchen Cooking Assistant",
        category: Category::Healthcare,
        difficulty: Difficulty::Medium,
        duration: "7-10 min",
        rating: 4.8,
        usage: "16,500+",
        image: "https://images.pexels.com/photos/1435904/pexels-photo-1435904.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Learn how VISIONX makes cooking safer and more enjoyable by identifying ingredients, reading recipes, monitoring cooking progress, and providing step-by-step culinary guidance.",
        features: &[
            "Ingredient identification",
            "Recipe reading",
            "Timer management",
            "Safety monitoring",
            "Cooking guidance",
        ],
        benefits: &["Culinary independence", "Kitchen safety", "Nutritious meals"],
        audio_description: "This scenario demonstrates how users can cook independently with AI assistance for ingredient identification and recipe guidance.",
        steps: &[
            ("Ingredient and utensil recognition", "The glasses identify cooking ingredients and kitchen utensils for recipe preparation."),
            ("Recipe processing and guidance", "AI provides step-by-step cooking instructions with timing and technique tips."),
            ("Safety monitoring and alerts", "The system monitors cooking progress and provides safety alerts when needed."),
        ],
    },
    Seed {
        id: 8,
        title: "Currency & Money Recognition",
        category: Category::Shopping,
        difficulty: Difficulty::Easy,
        duration: "2-3 min",
        rating: 4.6,
        usage: "21,000+",
        image: "https://images.pexels.com/photos/164527/pexels-photo-164527.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Experience how VISIONX helps users identify different currency denominations, count money accurately, and handle financial transactions with confidence and security.",
        features: &[
            "Currency recognition",
            "Denomination identification",
            "Money counting",
            "Transaction assistance",
            "Security features",
        ],
        benefits: &["Financial independence", "Transaction confidence", "Fraud prevention"],
        audio_description: "This demonstration shows how users can handle money and financial transactions independently with accurate currency recognition.",
        steps: &[
            ("Currency detection and analysis", "The system detects and analyzes different currency denominations and security features."),
            ("Value calculation and counting", "AI calculates total values and provides accurate counting assistance."),
            ("Transaction guidance", "Users receive audio feedback for making payments and receiving change."),
        ],
    },
    Seed {
        id: 9,
        title: "Indoor Navigation & Wayfinding",
        category: Category::Navigation,
        difficulty: Difficulty::Hard,
        duration: "5-7 min",
        rating: 4.4,
        usage: "14,300+",
        image: "https://images.pexels.com/photos/1181467/pexels-photo-1181467.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Discover how VISIONX provides indoor navigation assistance by identifying landmarks, reading signs, detecting obstacles, and guiding users through complex indoor environments.",
        features: &[
            "Indoor mapping",
            "Landmark recognition",
            "Obstacle detection",
            "Sign reading",
            "Audio directions",
        ],
        benefits: &[
            "Independent navigation",
            "Reduced disorientation",
            "Increased mobility",
        ],
        audio_description: "This scenario demonstrates indoor navigation capabilities that help users move confidently through buildings and complex indoor spaces.",
        steps: &[
            ("Environment mapping and analysis", "The system creates a spatial map of the indoor environment and identifies key landmarks."),
            ("Path planning and obstacle detection", "AI plans optimal routes while detecting and avoiding obstacles in real-time."),
            ("Turn-by-turn navigation guidance", "Users receive detailed audio directions with landmark references for navigation."),
        ],
    },
    Seed {
        id: 10,
        title: "Emergency Situation Response",
        category: Category::Safety,
        difficulty: Difficulty::Hard,
        duration: "4-6 min",
        rating: 4.9,
        usage: "8,900+",
        image: "https://images.pexels.com/photos/263402/pexels-photo-263402.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Learn how VISIONX provides critical assistance during emergencies by detecting hazards, identifying emergency exits, reading safety signs, and connecting users with emergency services.",
        features: &[
            "Hazard detection",
            "Emergency exit identification",
            "Safety sign reading",
            "Emergency contacts",
            "Location sharing",
        ],
        benefits: &["Enhanced safety", "Emergency preparedness", "Peace of mind"],
        audio_description: "This demonstration shows how the glasses provide crucial assistance during emergency situations with hazard detection and emergency response features.",
        steps: &[
            ("Emergency detection and assessment", "The system detects potential emergency situations and assesses the level of danger."),
            ("Safety route identification", "AI identifies the safest evacuation routes and emergency exits."),
            ("Emergency response coordination", "The system provides emergency guidance and can contact emergency services if needed."),
        ],
    },
];
