#![allow(dead_code)]

/// A vertical form: a title, two weighted fields sharing a row, and a
/// relative footer with a centered button and a second one below it.
pub const FORM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<xml>
    <LinearLayout id="@+id/form" width="match_parent" height="match_parent"
                  orientation="vertical" padding="10">
        <Label id="@+id/title" width="wrap_content" height="wrap_content"
               text="Sign in" font="System:20" margin-bottom="6"/>
        <LinearLayout id="@+id/row" width="match_parent" height="40" orientation="horizontal">
            <View id="@+id/user" width="0" height="match_parent" weight="2"/>
            <View id="@+id/gap" width="30" height="match_parent"/>
            <View id="@+id/pass" width="0" height="match_parent" weight="1"/>
        </LinearLayout>
        <RelativeLayout id="@+id/footer" width="match_parent" height="0" weight="1">
            <Button id="@+id/submit" width="80" height="30" title="Go"
                    align_parent="center"/>
            <Button id="@+id/cancel" width="80" height="30" title="Cancel"
                    below="@id/submit" align_left="@id/submit" margin-top="5"/>
            <View id="@+id/divider" width="0" height="1" to_right_of="@id/cancel"
                  align_top="@id/cancel" align_parent="right"/>
        </RelativeLayout>
    </LinearLayout>
</xml>"#;

/// Three boxes in a relative container, referencing each other before and
/// after they are declared.
pub const FORWARD_REFERENCES: &str = r#"<xml>
    <RelativeLayout width="match_parent" height="match_parent">
        <View id="@+id/second" width="50" height="20" below="@+id/first"/>
        <View id="@+id/first" width="50" height="20" align_parent="center_horizontal"/>
        <View id="@+id/third" width="30" height="20" to_right_of="@id/first" align_top="@id/first"/>
    </RelativeLayout>
</xml>"#;

/// The classic centered box.
pub const CENTERED: &str = r#"<xml>
    <RelativeLayout width="match_parent" height="match_parent">
        <View id="@+id/box" width="100" height="100" align_parent="center" background_color="@code/F00"/>
    </RelativeLayout>
</xml>"#;

/// A header, body and footer stacked vertically, the body taking the rest.
pub const STACK: &str = r#"<xml>
    <LinearLayout width="match_parent" height="match_parent" orientation="vertical">
        <View id="@+id/header" width="match_parent" height="44"/>
        <View id="@+id/body" width="match_parent" height="0" weight="1"/>
        <View id="@+id/hidden" width="match_parent" height="100" visibility="gone"/>
        <View id="@+id/footer" width="match_parent" height="50"/>
    </LinearLayout>
</xml>"#;
