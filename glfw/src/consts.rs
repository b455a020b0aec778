// Generated by glfw-generator from GLFW/glfw3.h. Do not edit by hand.

#![allow(non_upper_case_globals)]

use libc::c_int;

pub const VersionMajor: c_int = 3;
pub const VersionMinor: c_int = 3;
pub const VersionRevision: c_int = 8;
pub const True: c_int = 1;
pub const False: c_int = 0;
pub const Release: c_int = 0;
pub const Press: c_int = 1;
pub const Repeat: c_int = 2;
pub const HatCentered: c_int = 0;
pub const HatUp: c_int = 1;
pub const HatRight: c_int = 2;
pub const HatDown: c_int = 4;
pub const HatLeft: c_int = 8;
pub const KeyUnknown: c_int = -1;
pub const KeySpace: c_int = 32;
pub const KeyApostrophe: c_int = 39;
pub const KeyComma: c_int = 44;
pub const KeyMinus: c_int = 45;
pub const KeyPeriod: c_int = 46;
pub const KeySlash: c_int = 47;
pub const Key0: c_int = 48;
pub const Key1: c_int = 49;
pub const Key2: c_int = 50;
pub const Key3: c_int = 51;
pub const Key4: c_int = 52;
pub const Key5: c_int = 53;
pub const Key6: c_int = 54;
pub const Key7: c_int = 55;
pub const Key8: c_int = 56;
pub const Key9: c_int = 57;
pub const KeySemicolon: c_int = 59;
pub const KeyEqual: c_int = 61;
pub const KeyA: c_int = 65;
pub const KeyB: c_int = 66;
pub const KeyC: c_int = 67;
pub const KeyD: c_int = 68;
pub const KeyE: c_int = 69;
pub const KeyF: c_int = 70;
pub const KeyG: c_int = 71;
pub const KeyH: c_int = 72;
pub const KeyI: c_int = 73;
pub const KeyJ: c_int = 74;
pub const KeyK: c_int = 75;
pub const KeyL: c_int = 76;
pub const KeyM: c_int = 77;
pub const KeyN: c_int = 78;
pub const KeyO: c_int = 79;
pub const KeyP: c_int = 80;
pub const KeyQ: c_int = 81;
pub const KeyR: c_int = 82;
pub const KeyS: c_int = 83;
pub const KeyT: c_int = 84;
pub const KeyU: c_int = 85;
pub const KeyV: c_int = 86;
pub const KeyW: c_int = 87;
pub const KeyX: c_int = 88;
pub const KeyY: c_int = 89;
pub const KeyZ: c_int = 90;
pub const KeyLeftBracket: c_int = 91;
pub const KeyBackslash: c_int = 92;
pub const KeyRightBracket: c_int = 93;
pub const KeyGraveAccent: c_int = 96;
pub const KeyWorld1: c_int = 161;
pub const KeyWorld2: c_int = 162;
pub const KeyEscape: c_int = 256;
pub const KeyEnter: c_int = 257;
pub const KeyTab: c_int = 258;
pub const KeyBackspace: c_int = 259;
pub const KeyInsert: c_int = 260;
pub const KeyDelete: c_int = 261;
pub const KeyRight: c_int = 262;
pub const KeyLeft: c_int = 263;
pub const KeyDown: c_int = 264;
pub const KeyUp: c_int = 265;
pub const KeyPageUp: c_int = 266;
pub const KeyPageDown: c_int = 267;
pub const KeyHome: c_int = 268;
pub const KeyEnd: c_int = 269;
pub const KeyCapsLock: c_int = 280;
pub const KeyScrollLock: c_int = 281;
pub const KeyNumLock: c_int = 282;
pub const KeyPrintScreen: c_int = 283;
pub const KeyPause: c_int = 284;
pub const KeyF1: c_int = 290;
pub const KeyF2: c_int = 291;
pub const KeyF3: c_int = 292;
pub const KeyF4: c_int = 293;
pub const KeyF5: c_int = 294;
pub const KeyF6: c_int = 295;
pub const KeyF7: c_int = 296;
pub const KeyF8: c_int = 297;
pub const KeyF9: c_int = 298;
pub const KeyF10: c_int = 299;
pub const KeyF11: c_int = 300;
pub const KeyF12: c_int = 301;
pub const KeyF13: c_int = 302;
pub const KeyF14: c_int = 303;
pub const KeyF15: c_int = 304;
pub const KeyF16: c_int = 305;
pub const KeyF17: c_int = 306;
pub const KeyF18: c_int = 307;
pub const KeyF19: c_int = 308;
pub const KeyF20: c_int = 309;
pub const KeyF21: c_int = 310;
pub const KeyF22: c_int = 311;
pub const KeyF23: c_int = 312;
pub const KeyF24: c_int = 313;
pub const KeyF25: c_int = 314;
pub const KeyKp0: c_int = 320;
pub const KeyKp1: c_int = 321;
pub const KeyKp2: c_int = 322;
pub const KeyKp3: c_int = 323;
pub const KeyKp4: c_int = 324;
pub const KeyKp5: c_int = 325;
pub const KeyKp6: c_int = 326;
pub const KeyKp7: c_int = 327;
pub const KeyKp8: c_int = 328;
pub const KeyKp9: c_int = 329;
pub const KeyKpDecimal: c_int = 330;
pub const KeyKpDivide: c_int = 331;
pub const KeyKpMultiply: c_int = 332;
pub const KeyKpSubtract: c_int = 333;
pub const KeyKpAdd: c_int = 334;
pub const KeyKpEnter: c_int = 335;
pub const KeyKpEqual: c_int = 336;
pub const KeyLeftShift: c_int = 340;
pub const KeyLeftControl: c_int = 341;
pub const KeyLeftAlt: c_int = 342;
pub const KeyLeftSuper: c_int = 343;
pub const KeyRightShift: c_int = 344;
pub const KeyRightControl: c_int = 345;
pub const KeyRightAlt: c_int = 346;
pub const KeyRightSuper: c_int = 347;
pub const KeyMenu: c_int = 348;
pub const KeyLast: c_int = glfw_sys::GLFW_KEY_MENU;
pub const ModShift: c_int = 0x0001;
pub const ModControl: c_int = 0x0002;
pub const ModAlt: c_int = 0x0004;
pub const ModSuper: c_int = 0x0008;
pub const ModCapsLock: c_int = 0x0010;
pub const ModNumLock: c_int = 0x0020;
pub const MouseButton1: c_int = 0;
pub const MouseButton2: c_int = 1;
pub const MouseButton3: c_int = 2;
pub const MouseButton4: c_int = 3;
pub const MouseButton5: c_int = 4;
pub const MouseButton6: c_int = 5;
pub const MouseButton7: c_int = 6;
pub const MouseButton8: c_int = 7;
pub const MouseButtonLast: c_int = glfw_sys::GLFW_MOUSE_BUTTON_8;
pub const MouseButtonLeft: c_int = glfw_sys::GLFW_MOUSE_BUTTON_1;
pub const MouseButtonRight: c_int = glfw_sys::GLFW_MOUSE_BUTTON_2;
pub const MouseButtonMiddle: c_int = glfw_sys::GLFW_MOUSE_BUTTON_3;
pub const Joystick1: c_int = 0;
pub const Joystick2: c_int = 1;
pub const Joystick3: c_int = 2;
pub const Joystick4: c_int = 3;
pub const Joystick5: c_int = 4;
pub const Joystick6: c_int = 5;
pub const Joystick7: c_int = 6;
pub const Joystick8: c_int = 7;
pub const Joystick9: c_int = 8;
pub const Joystick10: c_int = 9;
pub const Joystick11: c_int = 10;
pub const Joystick12: c_int = 11;
pub const Joystick13: c_int = 12;
pub const Joystick14: c_int = 13;
pub const Joystick15: c_int = 14;
pub const Joystick16: c_int = 15;
pub const JoystickLast: c_int = glfw_sys::GLFW_JOYSTICK_16;
pub const GamepadButtonA: c_int = 0;
pub const GamepadButtonB: c_int = 1;
pub const GamepadButtonX: c_int = 2;
pub const GamepadButtonY: c_int = 3;
pub const GamepadButtonLeftBumper: c_int = 4;
pub const GamepadButtonRightBumper: c_int = 5;
pub const GamepadButtonBack: c_int = 6;
pub const GamepadButtonStart: c_int = 7;
pub const GamepadButtonGuide: c_int = 8;
pub const GamepadButtonLeftThumb: c_int = 9;
pub const GamepadButtonRightThumb: c_int = 10;
pub const GamepadButtonDpadUp: c_int = 11;
pub const GamepadButtonDpadRight: c_int = 12;
pub const GamepadButtonDpadDown: c_int = 13;
pub const GamepadButtonDpadLeft: c_int = 14;
pub const GamepadButtonLast: c_int = glfw_sys::GLFW_GAMEPAD_BUTTON_DPAD_LEFT;
pub const GamepadButtonCross: c_int = glfw_sys::GLFW_GAMEPAD_BUTTON_A;
pub const GamepadButtonCircle: c_int = glfw_sys::GLFW_GAMEPAD_BUTTON_B;
pub const GamepadButtonSquare: c_int = glfw_sys::GLFW_GAMEPAD_BUTTON_X;
pub const GamepadButtonTriangle: c_int = glfw_sys::GLFW_GAMEPAD_BUTTON_Y;
pub const GamepadAxisLeftX: c_int = 0;
pub const GamepadAxisLeftY: c_int = 1;
pub const GamepadAxisRightX: c_int = 2;
pub const GamepadAxisRightY: c_int = 3;
pub const GamepadAxisLeftTrigger: c_int = 4;
pub const GamepadAxisRightTrigger: c_int = 5;
pub const GamepadAxisLast: c_int = glfw_sys::GLFW_GAMEPAD_AXIS_RIGHT_TRIGGER;
pub const NoError: c_int = 0;
pub const NotInitialized: c_int = 0x00010001;
pub const NoCurrentContext: c_int = 0x00010002;
pub const InvalidEnum: c_int = 0x00010003;
pub const InvalidValue: c_int = 0x00010004;
pub const OutOfMemory: c_int = 0x00010005;
pub const ApiUnavailable: c_int = 0x00010006;
pub const VersionUnavailable: c_int = 0x00010007;
pub const PlatformError: c_int = 0x00010008;
pub const FormatUnavailable: c_int = 0x00010009;
pub const NoWindowContext: c_int = 0x0001000A;
pub const Focused: c_int = 0x00020001;
pub const Iconified: c_int = 0x00020002;
pub const Resizable: c_int = 0x00020003;
pub const Visible: c_int = 0x00020004;
pub const Decorated: c_int = 0x00020005;
pub const AutoIconify: c_int = 0x00020006;
pub const Floating: c_int = 0x00020007;
pub const Maximized: c_int = 0x00020008;
pub const CenterCursor: c_int = 0x00020009;
pub const TransparentFramebuffer: c_int = 0x0002000A;
pub const Hovered: c_int = 0x0002000B;
pub const FocusOnShow: c_int = 0x0002000C;
pub const RedBits: c_int = 0x00021001;
pub const GreenBits: c_int = 0x00021002;
pub const BlueBits: c_int = 0x00021003;
pub const AlphaBits: c_int = 0x00021004;
pub const DepthBits: c_int = 0x00021005;
pub const StencilBits: c_int = 0x00021006;
pub const AccumRedBits: c_int = 0x00021007;
pub const AccumGreenBits: c_int = 0x00021008;
pub const AccumBlueBits: c_int = 0x00021009;
pub const AccumAlphaBits: c_int = 0x0002100A;
pub const AuxBuffers: c_int = 0x0002100B;
pub const Stereo: c_int = 0x0002100C;
pub const Samples: c_int = 0x0002100D;
pub const SrgbCapable: c_int = 0x0002100E;
pub const RefreshRate: c_int = 0x0002100F;
pub const Doublebuffer: c_int = 0x00021010;
pub const ClientApi: c_int = 0x00022001;
pub const ContextVersionMajor: c_int = 0x00022002;
pub const ContextVersionMinor: c_int = 0x00022003;
pub const ContextRevision: c_int = 0x00022004;
pub const ContextRobustness: c_int = 0x00022005;
pub const OpenGLForwardCompatible: c_int = 0x00022006;
pub const OpenGLDebugContext: c_int = 0x00022007;
pub const OpenGLProfile: c_int = 0x00022008;
pub const ContextReleaseBehavior: c_int = 0x00022009;
pub const ContextNoError: c_int = 0x0002200A;
pub const ContextCreationApi: c_int = 0x0002200B;
pub const ScaleToMonitor: c_int = 0x0002200C;
pub const CocoaRetinaFramebuffer: c_int = 0x00023001;
pub const CocoaFrameName: c_int = 0x00023002;
pub const CocoaGraphicsSwitching: c_int = 0x00023003;
pub const X11ClassName: c_int = 0x00024001;
pub const X11InstanceName: c_int = 0x00024002;
pub const NoApi: c_int = 0;
pub const OpenGLApi: c_int = 0x00030001;
pub const OpenGLEsApi: c_int = 0x00030002;
pub const NoRobustness: c_int = 0;
pub const NoResetNotification: c_int = 0x00031001;
pub const LoseContextOnReset: c_int = 0x00031002;
pub const OpenGLAnyProfile: c_int = 0;
pub const OpenGLCoreProfile: c_int = 0x00032001;
pub const OpenGLCompatProfile: c_int = 0x00032002;
pub const Cursor: c_int = 0x00033001;
pub const StickyKeys: c_int = 0x00033002;
pub const StickyMouseButtons: c_int = 0x00033003;
pub const LockKeyMods: c_int = 0x00033004;
pub const RawMouseMotion: c_int = 0x00033005;
pub const CursorNormal: c_int = 0x00034001;
pub const CursorHidden: c_int = 0x00034002;
pub const CursorDisabled: c_int = 0x00034003;
pub const AnyReleaseBehavior: c_int = 0;
pub const ReleaseBehaviorFlush: c_int = 0x00035001;
pub const ReleaseBehaviorNone: c_int = 0x00035002;
pub const NativeContextApi: c_int = 0x00036001;
pub const EglContextApi: c_int = 0x00036002;
pub const OsmesaContextApi: c_int = 0x00036003;
pub const ArrowCursor: c_int = 0x00036001;
pub const IbeamCursor: c_int = 0x00036002;
pub const CrosshairCursor: c_int = 0x00036003;
pub const HandCursor: c_int = 0x00036004;
pub const HresizeCursor: c_int = 0x00036005;
pub const VresizeCursor: c_int = 0x00036006;
pub const Connected: c_int = 0x00040001;
pub const Disconnected: c_int = 0x00040002;
pub const JoystickHatButtons: c_int = 0x00050001;
pub const CocoaChdirResources: c_int = 0x00051001;
pub const CocoaMenubar: c_int = 0x00051002;
pub const DontCare: c_int = -1;
