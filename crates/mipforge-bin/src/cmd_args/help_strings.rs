pub static ENHANCE_ABOUT: &str = "Resize a single image to a fixed size

With no arguments TicTacToe.png is resized to 1024x1024
and written to enhanced_image.png";

pub static MIPMAP_ABOUT: &str = "Generate launcher icon mipmaps from one image

Every density writes mipmap-<density>.png into the output directory,
always as PNG, with sides of floor(base size * scale)";

pub static REMOVE_BACKGROUND_ABOUT: &str = "Invert the colors of an image or a folder of images

The output is RGBA with every color channel inverted and alpha kept.
Results are written next to the input as <name>_processed.<ext>";

pub static RESIZE_AND_REMOVE_ABOUT: &str = "Resize then invert the colors of an image or a folder of images

Results keep their file name and are written into the output directory";

pub static MODE_HELP: &str = "Processing mode

1 processes the single image given by --path,
2 processes every regular file directly inside the folder given by --path.
Subdirectories are skipped. When missing, the mode is asked for interactively";

pub static DENSITY_HELP: &str = "Density as NAME=SCALE

May be repeated, e.g --density mdpi=1 --density hdpi=1.5
When given, replaces the default table of
mdpi=1, hdpi=1.5, xhdpi=2, xxhdpi=3, xxxhdpi=4";
