use crate::components::drive_burst::DriveBurst;
use crate::components::envelope::ContactEnvelope;
use crate::components::floating::Floating;
use crate::components::icon::IconGlyph;
use crate::components::scramble_text::ScrambleText;
use crate::components::spotlight_card::SpotlightCard;
use crate::theme::use_palette;
use leptos::*;
use portfolio_core::content::{
    Icon, Section, ACHIEVEMENTS, INTERPERSONAL_SKILLS, PROFILE, PROJECTS, TECHNICAL_SKILLS,
};
use portfolio_core::ContactFlow;

/// Every section, in page order.
#[component]
pub fn Sections(flow: RwSignal<ContactFlow>, on_submit: Callback<()>) -> impl IntoView {
    Section::ORDER
        .iter()
        .map(|section| match section {
            Section::Hero => view! { <Hero /> }.into_view(),
            Section::Contact => view! {
              <section id=section.anchor() class="page-section contact">
                <ContactEnvelope flow=flow on_submit=on_submit />
              </section>
            }
            .into_view(),
            other => view! { <ContentSection section=*other /> }.into_view(),
        })
        .collect_view()
}

#[component]
fn Hero() -> impl IntoView {
    let palette = use_palette();

    view! {
      <section id="home" class="hero">
        <div class="hero-backdrop">
          <img src=PROFILE.hero_image alt="" style=move || format!("opacity: {}", palette.get().hero_opacity) />
          <div class="hero-fade"></div>
        </div>
        <Floating>
          <div class="hero-text">
            <div class=move || format!("hero-role {}", palette.get().accent)>{PROFILE.role}</div>
            <h1 class="hero-name">
              <ScrambleText text=PROFILE.name />
            </h1>
            <div class="focus-pills">
              {PROFILE
                  .focus
                  .iter()
                  .enumerate()
                  .map(|(i, area)| {
                      view! {
                        {(i != 0)
                            .then(|| view! { <span class=move || format!("pill-dot {}", palette.get().accent)>"•"</span> })}
                        <span class="pill">{*area}</span>
                      }
                  })
                  .collect_view()}
            </div>
          </div>
        </Floating>
      </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, icon: Icon) -> impl IntoView {
    let palette = use_palette();
    view! {
      <h2 class=move || format!("section-heading {}", palette.get().accent)>
        <IconGlyph icon=icon />
        <ScrambleText text=title />
      </h2>
    }
}

#[component]
fn ContentSection(section: Section) -> impl IntoView {
    let heading = section
        .heading()
        .map(|(title, icon)| view! { <SectionHeading title=title icon=icon /> });

    view! {
      <section id=section.anchor() class="page-section">
        {heading}
        <DriveBurst>{section_body(section)}</DriveBurst>
      </section>
    }
}

fn section_body(section: Section) -> View {
    let palette = use_palette();
    let accent = move || palette.get().accent;

    match section {
        Section::About => view! {
          <SpotlightCard class="card-wide">
            <p class="about">
              {PROFILE
                  .about
                  .iter()
                  .map(|(text, highlighted)| {
                      if *highlighted {
                          view! { <strong class=accent>{*text}</strong> }.into_view()
                      } else {
                          (*text).into_view()
                      }
                  })
                  .collect_view()}
            </p>
          </SpotlightCard>
        }
        .into_view(),
        Section::Experience => {
            let job = PROFILE.experience;
            view! {
              <SpotlightCard class="card-wide">
                <div class="experience-head">
                  <div>
                    <h3>{job.role}</h3>
                    <p class=accent>{job.organisation}</p>
                  </div>
                  <span class="badge">{job.period}</span>
                </div>
                <p class="muted">{job.summary}</p>
              </SpotlightCard>
            }
            .into_view()
        }
        Section::Education => {
            let school = PROFILE.education;
            view! {
              <SpotlightCard class="card-wide">
                <div class="education-row">
                  <div class=move || format!("education-badge {}", accent())>
                    <IconGlyph icon=Icon::GraduationCap />
                  </div>
                  <div>
                    <h3>{school.degree}</h3>
                    <p class="muted">{school.institution}</p>
                    <p class=move || format!("mono {}", accent())>{school.years}</p>
                  </div>
                </div>
              </SpotlightCard>
            }
            .into_view()
        }
        Section::Projects => view! {
          <div class="grid two">
            {PROJECTS
                .iter()
                .map(|p| view! {
                  <SpotlightCard class="card">
                    <h3>{p.title}</h3>
                    <p class="muted">{p.description}</p>
                    <div class="tags">
                      {p.tags.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
                    </div>
                  </SpotlightCard>
                })
                .collect_view()}
          </div>
        }
        .into_view(),
        Section::Skills => view! {
          <div class="grid skills">
            {TECHNICAL_SKILLS
                .iter()
                .map(|skill| view! {
                  <SpotlightCard class="skill" color=skill.spotlight_color()>
                    <IconGlyph icon=skill.icon style=format!("color: {}", skill.color) />
                    <span class="skill-name">{skill.name}</span>
                  </SpotlightCard>
                })
                .collect_view()}
          </div>
        }
        .into_view(),
        Section::Interpersonal => view! {
          <div class="grid two">
            {INTERPERSONAL_SKILLS
                .iter()
                .map(|s| view! {
                  <SpotlightCard class="card">
                    <h3 class=accent>{s.title}</h3>
                    <p class="muted">{s.description}</p>
                  </SpotlightCard>
                })
                .collect_view()}
          </div>
        }
        .into_view(),
        Section::Achievements => view! {
          <div class="grid two">
            {ACHIEVEMENTS
                .iter()
                .map(|a| view! {
                  <SpotlightCard class="card">
                    <div class="achievement">
                      <IconGlyph icon=a.icon class="trophy" />
                      <div>
                        <h3>{a.title}</h3>
                        <p class="muted">{a.description}</p>
                      </div>
                    </div>
                  </SpotlightCard>
                })
                .collect_view()}
          </div>
        }
        .into_view(),
        Section::Hero | Section::Contact => ().into_view(),
    }
}
