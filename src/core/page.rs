use crate::config::profile::ProfileConfig;
use crate::core::tenure::calculate_overall_experience;
use crate::domain::model::{EducationEntry, Engagement, Interest, Link, SkillCategory, Tenure};
use crate::utils::error::Result;
use std::fmt;

/// Sections in the order they appear on the page. The navigation menu has
/// its own order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Experience,
    Skills,
    Education,
    Interests,
    Contact,
}

impl SectionKind {
    pub const PAGE_ORDER: [SectionKind; 6] = [
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Interests,
        SectionKind::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Interests => "interests",
            SectionKind::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::About => "About Me",
            SectionKind::Experience => "Professional Journey",
            SectionKind::Skills => "My Toolkit",
            SectionKind::Education => "Learning Path",
            SectionKind::Interests => "My Passions",
            SectionKind::Contact => "Let's Connect",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    About {
        name: String,
        headline: String,
        highlights: Vec<String>,
    },
    Experience(Vec<Engagement>),
    Skills(Vec<SkillCategory>),
    Education(Vec<EducationEntry>),
    Interests(Vec<Interest>),
    Contact(Vec<Link>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub body: SectionBody,
}

/// Everything the display layer needs to render the single-page portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioPage {
    pub tenure: Tenure,
    pub sections: Vec<Section>,
    pub footer: String,
}

impl PortfolioPage {
    pub fn build(config: &ProfileConfig) -> Result<Self> {
        let tenure = calculate_overall_experience(config)?;

        let mut highlights = vec![format!("{} of Experience", tenure)];
        highlights.extend(config.profile.highlights.iter().cloned());

        let sections = SectionKind::PAGE_ORDER
            .iter()
            .map(|&kind| {
                let body = match kind {
                    SectionKind::About => SectionBody::About {
                        name: config.profile.name.clone(),
                        headline: config.profile.headline.clone(),
                        highlights: highlights.clone(),
                    },
                    SectionKind::Experience => SectionBody::Experience(config.engagements.clone()),
                    SectionKind::Skills => SectionBody::Skills(config.skills.clone()),
                    SectionKind::Education => SectionBody::Education(config.education.clone()),
                    SectionKind::Interests => SectionBody::Interests(config.interests.clone()),
                    SectionKind::Contact => SectionBody::Contact(config.contact.links.clone()),
                };
                Section { kind, body }
            })
            .collect();

        tracing::debug!(%tenure, "Built portfolio page");
        Ok(Self {
            tenure,
            sections,
            footer: config.footer(),
        })
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}

impl fmt::Display for PortfolioPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{:02}. {}", index + 1, section.kind.title())?;

            match &section.body {
                SectionBody::About {
                    name,
                    headline,
                    highlights,
                } => {
                    writeln!(f, "{}", name)?;
                    if !headline.is_empty() {
                        writeln!(f, "{}", headline)?;
                    }
                    for highlight in highlights {
                        writeln!(f, "  * {}", highlight)?;
                    }
                }
                SectionBody::Experience(engagements) => {
                    for engagement in engagements {
                        writeln!(f, "{} @ {}", engagement.role, engagement.company)?;
                        write!(f, "  {}", engagement.duration_label())?;
                        if !engagement.location.is_empty() {
                            write!(f, " | {}", engagement.location)?;
                        }
                        writeln!(f)?;
                        if !engagement.tags.is_empty() {
                            writeln!(f, "  [{}]", engagement.tags.join(", "))?;
                        }
                        for achievement in &engagement.achievements {
                            writeln!(f, "  > {}", achievement)?;
                        }
                    }
                }
                SectionBody::Skills(categories) => {
                    for category in categories {
                        write_titled(f, &category.title, &category.description)?;
                        for skill in &category.skills {
                            write!(
                                f,
                                "  - {} {}% | {} yrs",
                                skill.name, skill.level, skill.years_of_experience
                            )?;
                            if !skill.description.is_empty() {
                                write!(f, " | {}", skill.description)?;
                            }
                            if skill.trending {
                                write!(f, " [trending]")?;
                            }
                            if skill.certification {
                                write!(f, " [certified]")?;
                            }
                            writeln!(f)?;
                        }
                    }
                }
                SectionBody::Education(entries) => {
                    for entry in entries {
                        writeln!(f, "{}", entry.degree)?;
                        write!(f, "  {}", entry.institution)?;
                        if !entry.period.is_empty() {
                            write!(f, " | {}", entry.period)?;
                        }
                        writeln!(f)?;
                    }
                }
                SectionBody::Interests(interests) => {
                    for interest in interests {
                        write_titled(f, &interest.title, &interest.description)?;
                        if !interest.tags.is_empty() {
                            writeln!(f, "  [{}]", interest.tags.join(", "))?;
                        }
                        for action in &interest.actions {
                            writeln!(f, "  -> {}: {}", action.label, action.href)?;
                        }
                    }
                }
                SectionBody::Contact(links) => {
                    for link in links {
                        write!(f, "  {}: {}", link.label, link.href)?;
                        if !link.description.is_empty() {
                            write!(f, " ({})", link.description)?;
                        }
                        writeln!(f)?;
                    }
                    writeln!(f, "  Use `folio contact` to send a message.")?;
                }
            }
        }

        if !self.footer.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.footer)?;
        }
        Ok(())
    }
}

fn write_titled(f: &mut fmt::Formatter<'_>, title: &str, description: &str) -> fmt::Result {
    if description.is_empty() {
        writeln!(f, "{}", title)
    } else {
        writeln!(f, "{}: {}", title, description)
    }
}
