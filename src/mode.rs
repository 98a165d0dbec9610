use std::fs;

use bitflags::bitflags;

bitflags! {
    /// Portable filesystem node-type bits.
    ///
    /// The empty value means "regular file": ordinariness is the absence of
    /// any type bit, not a bit of its own. More than one bit may be set for
    /// a single node. Character devices carry `DEVICE | CHAR_DEVICE`, and
    /// some platforms report a symlink to a directory with both `DIR` and
    /// `SYMLINK` set, so the bits are not mutually exclusive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeBits: u32 {
        /// Directory.
        const DIR         = 1 << 0;
        /// Symbolic link.
        const SYMLINK     = 1 << 1;
        /// Named pipe (FIFO).
        const NAMED_PIPE  = 1 << 2;
        /// Unix domain socket.
        const SOCKET      = 1 << 3;
        /// Device file, block or character.
        const DEVICE      = 1 << 4;
        /// Character device. Set together with `DEVICE`, never alone.
        const CHAR_DEVICE = 1 << 5;
    }
}

impl TypeBits {
    /// Map a non-link-following [`fs::FileType`] to its type bits.
    ///
    /// Regular files map to [`TypeBits::empty`]. On Unix the extended node
    /// kinds (devices, fifos, sockets) are reported too; elsewhere anything
    /// that is not a directory or symlink comes back empty.
    pub fn from_file_type(ft: fs::FileType) -> Self {
        let mut bits = Self::empty();
        if ft.is_dir() {
            bits |= Self::DIR;
        }
        if ft.is_symlink() {
            bits |= Self::SYMLINK;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if ft.is_block_device() {
                bits |= Self::DEVICE;
            }
            if ft.is_char_device() {
                bits |= Self::DEVICE | Self::CHAR_DEVICE;
            }
            if ft.is_fifo() {
                bits |= Self::NAMED_PIPE;
            }
            if ft.is_socket() {
                bits |= Self::SOCKET;
            }
        }
        bits
    }

    /// `true` iff no type bit is set, i.e. the node is an ordinary file.
    pub fn is_regular(self) -> bool {
        self.is_empty()
    }
}
