//! Contact form
//!
//! Click a field to focus it, type into it, Escape or a click elsewhere to
//! leave it. "Send message" deliberately does nothing with the text.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::showcase::types::*;

/// Focus the pressed field; a click anywhere else clears focus.
pub fn focus_form_fields(
    mouse: Res<ButtonInput<MouseButton>>,
    fields: Query<(Entity, &Interaction), (Changed<Interaction>, With<FormField>)>,
    mut focus: ResMut<FocusedField>,
) {
    let pressed = fields
        .iter()
        .find(|(_, interaction)| **interaction == Interaction::Pressed)
        .map(|(entity, _)| entity);

    if let Some(entity) = pressed {
        focus.set_if_neq(FocusedField(Some(entity)));
    } else if mouse.just_pressed(MouseButton::Left) {
        focus.set_if_neq(FocusedField(None));
    }
}

/// Handle keyboard input for the focused field
pub fn type_into_form(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut char_events: MessageReader<KeyboardInput>,
    mut focus: ResMut<FocusedField>,
    mut fields: Query<&mut FormField>,
) {
    let Some(entity) = focus.0 else {
        char_events.clear();
        return;
    };
    let Ok(mut field) = fields.get_mut(entity) else {
        char_events.clear();
        focus.set_if_neq(FocusedField(None));
        return;
    };

    if keyboard.just_pressed(KeyCode::Escape) {
        char_events.clear();
        focus.set_if_neq(FocusedField(None));
        return;
    }

    if keyboard.just_pressed(KeyCode::Backspace) {
        field.value.pop();
    }
    if keyboard.just_pressed(KeyCode::Enter) && field.multiline {
        field.value.push('\n');
    }

    for event in char_events.read() {
        if !event.state.is_pressed() {
            continue;
        }
        match &event.logical_key {
            Key::Character(s) => field.value.push_str(s),
            Key::Space => field.value.push(' '),
            _ => {}
        }
    }
}

/// Redraw field text when its value, the focus or the theme changes.
pub fn render_form_fields(
    focus: Res<FocusedField>,
    theme: Res<ThemeMode>,
    fields: Query<(Entity, Ref<FormField>, &Children)>,
    mut texts: Query<(&mut Text, &mut ThemedText, &mut TextColor), With<FormFieldText>>,
) {
    let refresh_all = focus.is_changed() || theme.is_changed();
    let palette = theme.palette();

    for (entity, field, children) in fields.iter() {
        if !refresh_all && !field.is_changed() {
            continue;
        }
        let (shown, is_placeholder) = field.display(focus.0 == Some(entity));
        let role = if is_placeholder {
            ThemedText::Muted
        } else {
            ThemedText::Primary
        };
        for child in children.iter() {
            if let Ok((mut text, mut themed, mut color)) = texts.get_mut(child) {
                text.0 = shown.clone();
                *themed = role;
                color.0 = role.color(&palette).with_alpha(color.0.alpha());
            }
        }
    }
}

pub fn press_send_message(buttons: Query<&Interaction, (Changed<Interaction>, With<SendMessageButton>)>) {
    if buttons.iter().any(|interaction| *interaction == Interaction::Pressed) {
        debug!("Send message pressed; the contact form is display-only");
    }
}
