//! Static landing page copy and the status messages shown around the form.

use crate::domain::model::FormStatus;
use std::io::{self, Write};

pub const SIGNUP_ANCHOR: &str = "signup";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Signup,
}

impl Anchor {
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Signup => SIGNUP_ANCHOR,
        }
    }
}

/// The hero button. Activating it moves the viewer to the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: Anchor,
}

impl CallToAction {
    pub fn activate(&self) -> Anchor {
        self.target
    }
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub pitch: &'static str,
    pub cta: CallToAction,
    pub offer: &'static str,
}

#[derive(Debug, Clone)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone)]
pub struct LandingPage {
    pub hero: Hero,
    pub benefits: Vec<Highlight>,
    pub credentials: Vec<Highlight>,
    pub testimonials: Vec<Testimonial>,
    pub signup_title: &'static str,
    pub signup_subtitle: &'static str,
    pub form_disclaimer: &'static str,
    pub footer_links: Vec<FooterLink>,
}

impl Default for LandingPage {
    fn default() -> Self {
        Self {
            hero: Hero {
                headline: "Stuck on Your Thesis?",
                subheadline: "AI Can Help You Finish Faster",
                pitch: "Stop struggling with procrastination and overwhelm. Learn how AI tools \
                        can transform your study routine, boost your productivity, and help you \
                        complete your thesis with confidence.",
                cta: CallToAction {
                    label: "Get Early Access",
                    target: Anchor::Signup,
                },
                offer: "Join the first 20 students and get the course FREE",
            },
            benefits: vec![
                Highlight {
                    title: "AI-Powered Thesis Writing",
                    description: "Master ChatGPT, Grammarly, and Notion AI to research, outline, and write your thesis faster than ever before.",
                },
                Highlight {
                    title: "Beat Procrastination Forever",
                    description: "Learn proven productivity systems and AI tools that make starting and finishing tasks effortless.",
                },
                Highlight {
                    title: "Smart Task Management",
                    description: "Use AI assistants to break down overwhelming projects into manageable, actionable steps.",
                },
                Highlight {
                    title: "Study Smarter, Not Harder",
                    description: "Discover AI-enhanced study techniques that cut your study time in half while improving comprehension.",
                },
                Highlight {
                    title: "Research Like a Pro",
                    description: "Leverage AI tools like Elicit and Consensus to find relevant academic sources in minutes, not hours.",
                },
                Highlight {
                    title: "Boost Your Grades",
                    description: "Apply AI-enhanced learning strategies that help you retain more information and perform better on exams.",
                },
            ],
            credentials: vec![
                Highlight {
                    title: "10+ Years Teaching",
                    description: "Helping students finish degrees faster",
                },
                Highlight {
                    title: "500+ Students Guided",
                    description: "To successful thesis completion",
                },
                Highlight {
                    title: "PhD & Research Expert",
                    description: "Deep understanding of academic challenges",
                },
            ],
            testimonials: vec![
                Testimonial {
                    name: "Sarah M.",
                    role: "Master's Student, University of Vienna",
                    text: "I was stuck on my thesis for months. The AI techniques helped me finish it in just 6 weeks!",
                },
                Testimonial {
                    name: "Alex K.",
                    role: "Bachelor's Student, TU Wien",
                    text: "The AI research tools saved me so much time. What used to take hours now takes minutes.",
                },
                Testimonial {
                    name: "Maria L.",
                    role: "PhD Candidate, University of Salzburg",
                    text: "The methods are practical and actually work in real academic scenarios.",
                },
            ],
            signup_title: "Reserve Your Spot Now",
            signup_subtitle: "Be among the first 20 students to get exclusive FREE access to the complete AI Productivity Course (valued at €297).",
            form_disclaimer: "Your data is secure and will only be used to notify you about the course. No spam, unsubscribe anytime.",
            footer_links: vec![
                FooterLink {
                    name: "Privacy Policy",
                    href: "https://michaelmacher.com/privacy",
                },
                FooterLink {
                    name: "Imprint",
                    href: "https://michaelmacher.com/imprint",
                },
            ],
        }
    }
}

impl LandingPage {
    /// Writes every section down to (and including) the signup header.
    pub fn render_above_form<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.hero.headline)?;
        writeln!(out, "{}", self.hero.subheadline)?;
        writeln!(out)?;
        writeln!(out, "{}", self.hero.pitch)?;
        writeln!(out, "[ {} ]  {}", self.hero.cta.label, self.hero.offer)?;
        writeln!(out)?;

        writeln!(out, "What you will learn")?;
        for benefit in &self.benefits {
            writeln!(out, "  * {}: {}", benefit.title, benefit.description)?;
        }
        writeln!(out)?;

        writeln!(out, "Who is teaching")?;
        for credential in &self.credentials {
            writeln!(out, "  * {}: {}", credential.title, credential.description)?;
        }
        for testimonial in &self.testimonials {
            writeln!(
                out,
                "  \"{}\"\n    - {}, {}",
                testimonial.text, testimonial.name, testimonial.role
            )?;
        }
        writeln!(out)?;

        writeln!(out, "#{}", SIGNUP_ANCHOR)?;
        writeln!(out, "{}", self.signup_title)?;
        writeln!(out, "{}", self.signup_subtitle)?;
        writeln!(out, "{}", self.form_disclaimer)?;
        Ok(())
    }

    pub fn render_footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        let links: Vec<String> = self
            .footer_links
            .iter()
            .map(|link| format!("{} <{}>", link.name, link.href))
            .collect();
        writeln!(out, "{}", links.join(" | "))
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_above_form(out)?;
        self.render_footer(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Progress,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: BannerKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl StatusBanner {
    pub fn for_status(status: &FormStatus) -> Option<Self> {
        match status {
            FormStatus::Idle => None,
            FormStatus::Submitting => Some(Self {
                kind: BannerKind::Progress,
                title: "Securing Your Spot...",
                message: "",
            }),
            FormStatus::Success => Some(Self {
                kind: BannerKind::Success,
                title: "Welcome to the Course!",
                message: "Thank you for signing up! We'll notify you as soon as the course is ready. Check your email for next steps.",
            }),
            FormStatus::Error(_) => Some(Self {
                kind: BannerKind::Error,
                title: "Signup failed",
                message: "Something went wrong. Please try again or contact support.",
            }),
        }
    }
}
