fn main() {
    // Compile Slint UI files
    slint_build::compile("ui/main.slint").unwrap();

    // Embed Windows version info
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "Mouse Jiggler");
        res.set("FileDescription", "Keeps the computer from going idle");
        res.set("CompanyName", "Mouse Jiggler Contributors");
        res.set("OriginalFilename", "mousejiggler.exe");
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.compile().unwrap();
    }
}
