//! Page shell
//!
//! Header, scrolling page column and the caption overlaid on the scene.
//! Layout only; colours come from the theme palette and positions from
//! `fit_scene_viewport`. Also plays the staggered entrance fade.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::picking::Pickable;
use bevy::prelude::*;
use chrono::Datelike;

use crate::showcase::types::*;

use super::camera::CAPTION_INSET;

const HEADLINE_SIZE: f32 = 34.0;
const SECTION_TITLE_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 15.0;
const SMALL_SIZE: f32 = 12.0;

/// violet-600, used for the call-to-action buttons and the avatar.
const ACCENT_BUTTON: Color = Color::srgb(0.486, 0.227, 0.929);

// Entrance stagger, seconds after startup.
const HEADLINE_FADE: f32 = 0.6;
const INTRO_DELAY: f32 = 0.2;
const ACTIONS_DELAY: f32 = 0.4;
const SKILLS_DELAY: f32 = 0.6;
const FORM_DELAY: f32 = 0.15;

fn text(value: impl Into<String>, size: f32, role: ThemedText, palette: &ThemePalette) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(role.color(palette)),
        role,
    )
}

fn button_node(horizontal: f32, vertical: f32) -> Node {
    Node {
        padding: UiRect::axes(Val::Px(horizontal), Val::Px(vertical)),
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        ..default()
    }
}

/// Violet button with white text.
fn spawn_primary_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    size: f32,
    action: impl Bundle,
    fade: Option<FadeIn>,
) {
    let mut button = parent.spawn((Button, button_node(18.0, 10.0), BackgroundColor(ACCENT_BUTTON), action));
    if let Some(fade) = fade {
        button.insert(fade);
    }
    button.with_children(|button| {
        let mut label = button.spawn((
            Text::new(label),
            TextFont {
                font_size: size,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
        if let Some(fade) = fade {
            label.insert(fade.rising(0.0));
        }
    });
}

/// Chip-coloured button whose colours follow the theme.
fn spawn_secondary_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    size: f32,
    action: impl Bundle,
    fade: Option<FadeIn>,
    palette: &ThemePalette,
) {
    let mut button = parent.spawn((
        Button,
        button_node(18.0, 10.0),
        BackgroundColor(palette.chip),
        ThemedPanel::Chip,
        action,
    ));
    if let Some(fade) = fade {
        button.insert(fade);
    }
    button.with_children(|button| {
        let mut label = button.spawn(text(label, size, ThemedText::Primary, palette));
        if let Some(fade) = fade {
            label.insert(fade.rising(0.0));
        }
    });
}

/// Bare accent-coloured text button for links.
fn spawn_text_link(parent: &mut ChildSpawnerCommands, link: ExternalLink, size: f32, palette: &ThemePalette) {
    let label = link.label.clone();
    parent.spawn((Button, Node::default(), link)).with_children(|button| {
        button.spawn(text(label, size, ThemedText::Accent, palette));
    });
}

/// Builds the page UI from the bundled content.
pub fn setup_page(
    mut commands: Commands,
    content: Res<PortfolioContent>,
    theme: Res<ThemeMode>,
    hover: Res<HoverState>,
    viewport: Res<SceneViewport>,
) {
    let palette = theme.palette();

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Px(HEADER_HEIGHT),
            padding: UiRect::horizontal(Val::Px(PAGE_MARGIN)),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::SpaceBetween,
            ..default()
        })
        .with_children(|header| {
            spawn_identity(header, &content, &palette);
            spawn_nav(header, &palette);
            header
                .spawn(Node {
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|actions| {
                    spawn_theme_toggle(actions, *theme, &palette);
                    spawn_primary_button(actions, "Hire me", 14.0, SectionLink(PageSection::Contact), None);
                });
        });

    let hero = viewport.hero_rect();
    let year = chrono::Local::now().year();
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(hero.min.x),
                top: Val::Px(hero.min.y),
                width: Val::Px(hero.width()),
                height: Val::Px(hero.height()),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(14.0),
                overflow: Overflow::scroll_y(),
                ..default()
            },
            ScrollPosition::default(),
            HeroColumn,
        ))
        .with_children(|column| {
            spawn_hero(column, &content, &palette);
            spawn_projects(column, &content, &palette);
            spawn_about(column, &content, &palette);
            spawn_contact_form(column, &content.contact_form, &palette);
            column.spawn(text(content.footer_line(year), SMALL_SIZE, ThemedText::Muted, &palette));
        });

    spawn_caption(&mut commands, hover.hovered, &viewport);
}

fn spawn_identity(parent: &mut ChildSpawnerCommands, content: &PortfolioContent, palette: &ThemePalette) {
    parent
        .spawn(Node {
            align_items: AlignItems::Center,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Node {
                    width: Val::Px(40.0),
                    height: Val::Px(40.0),
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                BackgroundColor(ACCENT_BUTTON),
            ))
            .with_children(|avatar| {
                avatar.spawn((
                    Text::new(content.initials()),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });

            row.spawn(Node {
                flex_direction: FlexDirection::Column,
                ..default()
            })
            .with_children(|names| {
                names.spawn(text(content.name.clone(), 18.0, ThemedText::Primary, palette));
                names.spawn(text(content.role.clone(), SMALL_SIZE, ThemedText::Muted, palette));
            });
        });
}

fn spawn_nav(parent: &mut ChildSpawnerCommands, palette: &ThemePalette) {
    parent
        .spawn(Node {
            column_gap: Val::Px(24.0),
            ..default()
        })
        .with_children(|nav| {
            for section in PageSection::NAV {
                nav.spawn((Button, Node::default(), SectionLink(section)))
                    .with_children(|link| {
                        link.spawn(text(section.label(), 14.0, ThemedText::Primary, palette));
                    });
            }
        });
}

fn spawn_theme_toggle(parent: &mut ChildSpawnerCommands, theme: ThemeMode, palette: &ThemePalette) {
    parent
        .spawn((
            Button,
            button_node(12.0, 6.0),
            BackgroundColor(palette.chip),
            ThemedPanel::Chip,
            ThemeToggleButton,
        ))
        .with_children(|button| {
            button.spawn((
                text(theme.toggle_label(), 14.0, ThemedText::Primary, palette),
                ThemeToggleLabel,
            ));
        });
}

fn spawn_hero(parent: &mut ChildSpawnerCommands, content: &PortfolioContent, palette: &ThemePalette) {
    let headline_fade = FadeIn::after(0.0).lasting(HEADLINE_FADE).rising(16.0);
    parent.spawn((
        text(content.headline.clone(), HEADLINE_SIZE, ThemedText::Primary, palette),
        headline_fade,
    ));
    if !content.headline_accent.is_empty() {
        parent.spawn((
            text(content.headline_accent.clone(), HEADLINE_SIZE, ThemedText::Accent, palette),
            headline_fade,
        ));
    }
    parent.spawn((
        text(content.intro.clone(), BODY_SIZE, ThemedText::Muted, palette),
        FadeIn::after(INTRO_DELAY),
    ));

    parent
        .spawn(Node {
            column_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|actions| {
            let fade = Some(FadeIn::after(ACTIONS_DELAY));
            spawn_primary_button(actions, "See projects", BODY_SIZE, SectionLink(PageSection::Projects), fade);
            spawn_secondary_button(
                actions,
                "Get in touch",
                BODY_SIZE,
                SectionLink(PageSection::Contact),
                fade,
                palette,
            );
        });

    parent
        .spawn(Node {
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(8.0),
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|chips| {
            let fade = FadeIn::after(SKILLS_DELAY);
            for skill in &content.skills {
                chips
                    .spawn((
                        button_node(10.0, 6.0),
                        BackgroundColor(palette.chip),
                        ThemedPanel::Chip,
                        fade,
                    ))
                    .with_children(|chip| {
                        chip.spawn((text(skill.clone(), SMALL_SIZE, ThemedText::Primary, palette), fade));
                    });
            }
        });

    if !content.resume_url.is_empty() {
        spawn_text_link(
            parent,
            ExternalLink::new("Download resume", content.resume_url.clone()),
            14.0,
            palette,
        );
    }
}

fn spawn_projects(parent: &mut ChildSpawnerCommands, content: &PortfolioContent, palette: &ThemePalette) {
    if content.projects.is_empty() {
        return;
    }

    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                margin: UiRect::top(Val::Px(24.0)),
                ..default()
            },
            PageSection::Projects,
        ))
        .with_children(|section| {
            section.spawn((
                text("Selected Projects", SECTION_TITLE_SIZE, ThemedText::Primary, palette),
                FadeIn::after(0.0).rising(8.0),
            ));
            section
                .spawn(Node {
                    column_gap: Val::Px(10.0),
                    ..default()
                })
                .with_children(|grid| {
                    for project in &content.projects {
                        spawn_project_card(grid, project, palette);
                    }
                });
        });
}

fn spawn_project_card(parent: &mut ChildSpawnerCommands, project: &Project, palette: &ThemePalette) {
    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                flex_basis: Val::Px(0.0),
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(palette.panel),
            ThemedPanel::Card,
        ))
        .with_children(|card| {
            card.spawn(text(project.tag.clone(), SMALL_SIZE, ThemedText::Muted, palette));
            card.spawn(text(project.title.clone(), BODY_SIZE, ThemedText::Primary, palette));
            card.spawn(text(project.description.clone(), SMALL_SIZE, ThemedText::Muted, palette));
            card.spawn(Node {
                column_gap: Val::Px(12.0),
                margin: UiRect::top(Val::Px(6.0)),
                ..default()
            })
            .with_children(|links| {
                spawn_text_link(links, ExternalLink::new("Case study", project.case_study_url.clone()), SMALL_SIZE, palette);
                spawn_text_link(links, ExternalLink::new("Code", project.code_url.clone()), SMALL_SIZE, palette);
            });
        });
}

fn spawn_about(parent: &mut ChildSpawnerCommands, content: &PortfolioContent, palette: &ThemePalette) {
    parent
        .spawn((
            Node {
                column_gap: Val::Px(12.0),
                margin: UiRect::top(Val::Px(24.0)),
                ..default()
            },
            PageSection::About,
        ))
        .with_children(|row| {
            row.spawn(Node {
                flex_direction: FlexDirection::Column,
                flex_grow: 2.0,
                flex_basis: Val::Px(0.0),
                row_gap: Val::Px(6.0),
                ..default()
            })
            .with_children(|about| {
                about.spawn(text("About me", SECTION_TITLE_SIZE, ThemedText::Primary, palette));
                about.spawn(text(content.about.clone(), SMALL_SIZE, ThemedText::Muted, palette));
                for highlight in &content.highlights {
                    about.spawn(text(format!("• {highlight}"), SMALL_SIZE, ThemedText::Primary, palette));
                }
            });

            row.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    flex_grow: 1.0,
                    flex_basis: Val::Px(0.0),
                    padding: UiRect::all(Val::Px(10.0)),
                    row_gap: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(palette.panel),
                ThemedPanel::Card,
            ))
            .with_children(|card| {
                let contact = &content.contact;
                card.spawn(text("Contact", SMALL_SIZE, ThemedText::Muted, palette));
                card.spawn(text(contact.location.clone(), BODY_SIZE, ThemedText::Primary, palette));
                card.spawn(text(contact.email.clone(), BODY_SIZE, ThemedText::Primary, palette));
                card.spawn(Node {
                    column_gap: Val::Px(8.0),
                    margin: UiRect::top(Val::Px(8.0)),
                    ..default()
                })
                .with_children(|links| {
                    for link in &contact.links {
                        links
                            .spawn((button_node(10.0, 6.0), BackgroundColor(palette.chip), ThemedPanel::Chip))
                            .with_children(|chip| {
                                chip.spawn(text(link.clone(), SMALL_SIZE, ThemedText::Primary, palette));
                            });
                    }
                });
            });
        });
}

fn spawn_form_field(parent: &mut ChildSpawnerCommands, field: FormField, height: Option<f32>, palette: &ThemePalette) {
    let (shown, _) = field.display(false);
    parent
        .spawn((
            Button,
            Node {
                flex_grow: 1.0,
                flex_basis: Val::Px(0.0),
                height: height.map_or(Val::Auto, Val::Px),
                padding: UiRect::all(Val::Px(10.0)),
                align_items: AlignItems::FlexStart,
                ..default()
            },
            BackgroundColor(palette.panel),
            ThemedPanel::Card,
            FadeIn::after(FORM_DELAY),
            field,
        ))
        .with_children(|field| {
            field.spawn((
                text(shown, 14.0, ThemedText::Muted, palette),
                FadeIn::after(FORM_DELAY),
                FormFieldText,
            ));
        });
}

fn spawn_contact_form(parent: &mut ChildSpawnerCommands, form: &ContactForm, palette: &ThemePalette) {
    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                margin: UiRect::top(Val::Px(24.0)),
                ..default()
            },
            PageSection::Contact,
        ))
        .with_children(|section| {
            section.spawn((
                text(form.title.clone(), SECTION_TITLE_SIZE, ThemedText::Primary, palette),
                FadeIn::after(0.0).rising(8.0),
            ));
            section
                .spawn(Node {
                    column_gap: Val::Px(12.0),
                    ..default()
                })
                .with_children(|row| {
                    spawn_form_field(row, FormField::new(form.name_placeholder.clone(), false), None, palette);
                    spawn_form_field(row, FormField::new(form.email_placeholder.clone(), false), None, palette);
                });
            section
                .spawn(Node::default())
                .with_children(|row| {
                    spawn_form_field(row, FormField::new(form.message_placeholder.clone(), true), Some(120.0), palette);
                });
            section
                .spawn(Node {
                    justify_content: JustifyContent::FlexEnd,
                    ..default()
                })
                .with_children(|row| {
                    spawn_primary_button(row, &form.submit_label, BODY_SIZE, SendMessageButton, Some(FadeIn::after(FORM_DELAY)));
                });
        });
}

/// Caption box over the scene's bottom-left corner. Ignored by picking so it
/// never steals hover from the knot.
fn spawn_caption(commands: &mut Commands, hovered: bool, viewport: &SceneViewport) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(viewport.rect.min.x + CAPTION_INSET),
                bottom: Val::Px(viewport.window.y - viewport.rect.max.y + CAPTION_INSET),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                align_items: AlignItems::Center,
                column_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
            Pickable::IGNORE,
            HoverCaptionBox,
        ))
        .with_children(|caption| {
            caption.spawn((
                Node {
                    width: Val::Px(8.0),
                    height: Val::Px(8.0),
                    ..default()
                },
                BackgroundColor(hover_dot_color(hovered)),
                Pickable::IGNORE,
                HoverCaptionDot,
            ));
            caption.spawn((
                Text::new(hover_caption(hovered)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Pickable::IGNORE,
                HoverCaptionText,
            ));
        });
}

/// Ramp opacity (and slide up) of nodes still carrying [`FadeIn`]. Runs after
/// the theme repaint so the palette colour keeps its fade alpha.
pub fn fade_in_page(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &FadeIn,
        &mut Node,
        Option<&mut TextColor>,
        Option<&mut BackgroundColor>,
    )>,
) {
    let elapsed = time.elapsed_secs();
    for (entity, fade, mut node, text_color, background) in query.iter_mut() {
        let alpha = fade.alpha(elapsed);
        if let Some(mut color) = text_color {
            color.0 = color.0.with_alpha(alpha);
        }
        if let Some(mut background) = background {
            background.0 = background.0.with_alpha(alpha);
        }
        if fade.rise != 0.0 {
            node.top = Val::Px(fade.offset(elapsed));
        }
        if fade.is_finished(elapsed) {
            commands.entity(entity).remove::<FadeIn>();
        }
    }
}
