use unichr::get_unicode_char;

fn main() {
    println!("{}", get_unicode_char(0x61).expect("code point out of range")); // -> a
    println!("{}", get_unicode_char(97).expect("code point out of range")); // -> a
}
