//! Rule-based career chat assistant.
//!
//! Intent detection is a pure keyword scan and fully deterministic; only the
//! choice among equivalent response templates is random, to vary phrasing
//! between calls. Templates use `{placeholder}` substitution.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::roadmap::catalog::DEFAULT_CAREER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Skills,
    Why,
    Roadmap,
    Improve,
    Jobs,
    Greeting,
    Fallback,
}

/// First matching keyword bucket wins, scanned in a fixed order.
pub fn detect_intent(message: &str) -> Intent {
    let msg = message.to_lowercase();
    if msg.contains("skill") {
        Intent::Skills
    } else if msg.contains("why") || msg.contains("reason") || msg.contains("explain") {
        Intent::Why
    } else if msg.contains("roadmap") || msg.contains("plan") || msg.contains("step") {
        Intent::Roadmap
    } else if msg.contains("improve") || msg.contains("better") {
        Intent::Improve
    } else if msg.contains("job") || msg.contains("role") {
        Intent::Jobs
    } else if msg.contains("hello") || msg.contains("hi") {
        Intent::Greeting
    } else {
        Intent::Fallback
    }
}

struct CareerGuidance {
    career: &'static str,
    skills: &'static str,
    highlights: &'static str,
    interest: &'static str,
    weak_area: &'static str,
}

const GUIDANCE: [CareerGuidance; 5] = [
    CareerGuidance {
        career: "Software Engineer",
        skills: "Python, JavaScript, React, SQL, Git, Docker, and Data Structures & Algorithms",
        highlights: "Programming and Logic",
        interest: "Coding",
        weak_area: "Technical Depth",
    },
    CareerGuidance {
        career: "Data Scientist",
        skills: "Python, Pandas, NumPy, Machine Learning, SQL, and Statistics",
        highlights: "Math and Analytics",
        interest: "Coding",
        weak_area: "Technical Depth",
    },
    CareerGuidance {
        career: "Web Developer",
        skills: "HTML, CSS, JavaScript, React, Node.js, and MongoDB",
        highlights: "Programming and Logic",
        interest: "Coding",
        weak_area: "Technical Depth",
    },
    CareerGuidance {
        career: "Product Manager",
        skills: "Leadership, Communication, Agile, Jira, and Product Lifecycle",
        highlights: "Communication",
        interest: "Strategy",
        weak_area: "Soft Skills",
    },
    CareerGuidance {
        career: "UI/UX Designer",
        skills: "Figma, User Research, Prototyping, and Design Systems",
        highlights: "Communication",
        interest: "Design",
        weak_area: "Technical Depth",
    },
];

const WHY_TEMPLATES: [&str; 3] = [
    "Based on your strong {highlights} scores, along with your interest in {interest}, {career} is a strong match. Your profile aligns well with these types of specialized roles.",
    "Your aptitude in {highlights} and passion for {interest} make you a natural fit for a career as a {career}. Our analysis shows a high compatibility with this path.",
    "Considering your performance in {highlights}, a move into {career} looks very promising. It leverages your existing strengths while giving you room to grow in {interest}.",
];

const SKILLS_TEMPLATES: [&str; 3] = [
    "To excel as a {career}, you should double down on: {skills}. Mastering these will make your profile stand out to recruiters.",
    "The core toolkit for a {career} includes {skills}. Based on your current profile, focusing on these areas will bridge your most significant gaps.",
    "I recommend prioritizing {skills} for your {career} journey. These are the most sought-after competencies in the current market.",
];

const ROADMAP_TEMPLATES: [&str; 3] = [
    "I've structured your {career} roadmap into four key phases: 1. Foundations, 2. Core Skills, 3. Projects, and 4. Career Preparation. This structured approach ensures you miss no critical steps.",
    "Your journey to becoming a {career} follows a clear path: Foundations, then Skill Deep-Dives, followed by Portfolio Building, and finally Industry Prep. This sequence is optimized for your learning style.",
    "Let's get you ready for {career}! We'll start with the basics, move to advanced techniques, build some solid projects, and then polish your profile for interviews.",
];

const IMPROVE_TEMPLATES: [&str; 3] = [
    "To level up your {career} profile, focus on the missing skills identified in your dashboard. Hands-on projects are the best way to prove your expertise.",
    "Consistency is key! Try building a small project using {skills} this week. It's the best way to improve your match score for {career}.",
    "I'd suggest working on your {weak_area} if you want to see a quick jump in your {career} readiness. Every bit of practice counts!",
];

fn guidance_for(career: &str) -> &'static CareerGuidance {
    GUIDANCE
        .iter()
        .find(|g| g.career == career)
        .unwrap_or(&GUIDANCE[0])
}

/// Resolves the caller's career to one the guidance table knows.
pub fn resolve_chat_career(career: &str) -> &'static str {
    GUIDANCE
        .iter()
        .find(|g| g.career == career)
        .map(|g| g.career)
        .unwrap_or(DEFAULT_CAREER)
}

/// Builds a reply for a detected intent. Template choice varies per call;
/// the substituted facts do not.
pub fn respond(intent: Intent, career: &str, rng: &mut impl Rng) -> String {
    let g = guidance_for(resolve_chat_career(career));

    match intent {
        Intent::Skills => fill(pick(&SKILLS_TEMPLATES, rng), g),
        Intent::Why => fill(pick(&WHY_TEMPLATES, rng), g),
        Intent::Roadmap => fill(pick(&ROADMAP_TEMPLATES, rng), g),
        Intent::Improve => fill(pick(&IMPROVE_TEMPLATES, rng), g),
        Intent::Jobs => format!(
            "Common roles for this path include Junior {career}, Senior {career}, and specialized roles like Systems Architect. The industry is currently seeing high demand for these positions.",
            career = g.career
        ),
        Intent::Greeting => format!(
            "Hello! I am your career assistant. How can I help you with your {} journey today?",
            g.career
        ),
        Intent::Fallback => format!(
            "I'm here to help you navigate your journey toward becoming a {}. Feel free to ask about specific skills, why this was suggested, or your personalized roadmap.",
            g.career
        ),
    }
}

fn pick(templates: &[&'static str], rng: &mut impl Rng) -> &'static str {
    templates.choose(rng).copied().unwrap_or(templates[0])
}

fn fill(template: &str, g: &CareerGuidance) -> String {
    template
        .replace("{career}", g.career)
        .replace("{skills}", g.skills)
        .replace("{highlights}", g.highlights)
        .replace("{interest}", g.interest)
        .replace("{weak_area}", g.weak_area)
}
