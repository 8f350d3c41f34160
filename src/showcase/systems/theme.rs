use bevy::prelude::*;

use crate::showcase::types::*;

/// Flip the theme from the header button or the `T` key.
pub fn toggle_theme(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<ThemeToggleButton>)>,
    focus: Option<Res<FocusedField>>,
    mut theme: ResMut<ThemeMode>,
) {
    let clicked = buttons
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed);
    // `T` is just a letter while a form field has focus.
    let typing = focus.is_some_and(|focus| focus.0.is_some());

    if clicked || (!typing && keyboard.just_pressed(KeyCode::KeyT)) {
        *theme = theme.toggled();
        info!("Theme switched to {:?}", *theme);
    }
}

/// Repaint the page whenever the theme changes.
pub fn apply_theme(
    theme: Res<ThemeMode>,
    mut clear_color: ResMut<ClearColor>,
    mut texts: Query<(&ThemedText, &mut TextColor)>,
    mut panels: Query<(&ThemedPanel, &mut BackgroundColor)>,
    mut labels: Query<&mut Text, With<ThemeToggleLabel>>,
) {
    if !theme.is_changed() {
        return;
    }

    let palette = theme.palette();
    clear_color.0 = palette.background;

    for (role, mut color) in texts.iter_mut() {
        color.0 = role.color(&palette);
    }
    for (role, mut background) in panels.iter_mut() {
        background.0 = role.color(&palette);
    }
    for mut label in labels.iter_mut() {
        label.0 = theme.toggle_label().to_string();
    }
}
